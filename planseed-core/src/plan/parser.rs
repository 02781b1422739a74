//! Plan markdown parser
//!
//! Recognizes four line forms, in any amount of surrounding prose:
//!
//! ```text
//! ### Feature: <title> [P<n>]
//! - Task: <title> [P<n>]
//! - Subtask: <title> [P<n>]
//! - Notes: <text>
//! ```
//!
//! The pass is a small state machine over "currently open Feature" and
//! "currently open Task". Line-level errors are collected, not fatal: every
//! line that parses cleanly still yields an item.

use crate::error::{ParseError, ParseErrorKind};
use crate::issue::{IssueKind, Priority};

/// One Feature/Task/Subtask parsed from the plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanItem {
    /// Item kind
    pub kind: IssueKind,
    /// Title text after the keyword, priority tag stripped
    pub title: String,
    /// Tag priority, or the default when no tag was present
    pub priority: Priority,
    /// Notes lines attached to this item, in encounter order
    pub notes: Vec<String>,
    /// Title of the enclosing item; `None` for Features
    pub parent: Option<String>,
}

/// Result of one parse pass: items for every clean line, errors for the rest
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    /// Parsed items in document order
    pub items: Vec<PlanItem>,
    /// Collected line-level errors, in document order
    pub errors: Vec<ParseError>,
}

impl ParseOutcome {
    /// True when no line-level error was collected
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Outcome of looking for a trailing `[P<n>]` tag
enum PriorityTag {
    Absent,
    Valid(Priority),
    Invalid(String),
}

/// Parse a plan document.
///
/// Items without a priority tag resolve to `default_priority`. An errored
/// heading line emits no item and closes the scope it addressed, so children
/// of a rejected heading report `MissingAncestor` instead of attaching to an
/// earlier item.
pub fn parse_plan(content: &str, default_priority: Priority) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();
    let mut current_feature: Option<usize> = None;
    let mut current_task: Option<usize> = None;
    // Index of the most recently opened item, for Notes attachment
    let mut last_opened: Option<usize> = None;

    for (index, raw_line) in content.lines().enumerate() {
        let line_no = index + 1;
        let line = raw_line.trim();

        if let Some(rest) = line.strip_prefix("### Feature:") {
            match parse_heading(rest, line_no, "Feature", default_priority, &mut outcome.errors) {
                Some((title, priority)) => {
                    outcome.items.push(PlanItem {
                        kind: IssueKind::Feature,
                        title,
                        priority,
                        notes: Vec::new(),
                        parent: None,
                    });
                    current_feature = Some(outcome.items.len() - 1);
                    current_task = None;
                    last_opened = current_feature;
                }
                None => {
                    current_feature = None;
                    current_task = None;
                    last_opened = None;
                }
            }
            continue;
        }

        if let Some(rest) = line.strip_prefix("- Task:") {
            match parse_heading(rest, line_no, "Task", default_priority, &mut outcome.errors) {
                Some((title, priority)) => match current_feature {
                    Some(feature_idx) => {
                        let parent = outcome.items[feature_idx].title.clone();
                        outcome.items.push(PlanItem {
                            kind: IssueKind::Task,
                            title,
                            priority,
                            notes: Vec::new(),
                            parent: Some(parent),
                        });
                        current_task = Some(outcome.items.len() - 1);
                        last_opened = current_task;
                    }
                    None => {
                        outcome.errors.push(ParseError::new(
                            line_no,
                            ParseErrorKind::MissingAncestor,
                            format!("Task '{}' has no open Feature", title),
                        ));
                        current_task = None;
                        last_opened = None;
                    }
                },
                None => {
                    current_task = None;
                    last_opened = None;
                }
            }
            continue;
        }

        if let Some(rest) = line.strip_prefix("- Subtask:") {
            match parse_heading(rest, line_no, "Subtask", default_priority, &mut outcome.errors) {
                Some((title, priority)) => match current_task {
                    Some(task_idx) => {
                        let parent = outcome.items[task_idx].title.clone();
                        outcome.items.push(PlanItem {
                            kind: IssueKind::Subtask,
                            title,
                            priority,
                            notes: Vec::new(),
                            parent: Some(parent),
                        });
                        last_opened = Some(outcome.items.len() - 1);
                    }
                    None => {
                        outcome.errors.push(ParseError::new(
                            line_no,
                            ParseErrorKind::MissingAncestor,
                            format!("Subtask '{}' has no open Task", title),
                        ));
                        last_opened = None;
                    }
                },
                None => {
                    last_opened = None;
                }
            }
            continue;
        }

        if let Some(rest) = line.strip_prefix("- Notes:") {
            let note = rest.trim();
            if note.is_empty() {
                continue;
            }
            match last_opened {
                Some(idx) => outcome.items[idx].notes.push(note.to_string()),
                None => {
                    tracing::warn!(line = line_no, "Notes line with no open item, dropped");
                }
            }
            continue;
        }

        // Prose, blank separators, other markdown: insignificant.
    }

    outcome
}

/// Parse the text after a heading keyword into (title, priority).
///
/// Pushes `InvalidPriority`/`EmptyTitle` errors and returns `None` when the
/// line must not produce an item.
fn parse_heading(
    rest: &str,
    line_no: usize,
    keyword: &str,
    default_priority: Priority,
    errors: &mut Vec<ParseError>,
) -> Option<(String, Priority)> {
    let (title, tag) = split_priority_tag(rest);
    let mut ok = true;

    let priority = match tag {
        PriorityTag::Valid(priority) => priority,
        PriorityTag::Absent => default_priority,
        PriorityTag::Invalid(value) => {
            errors.push(ParseError::new(
                line_no,
                ParseErrorKind::InvalidPriority,
                format!("priority tag [P{}] is not an integer in 1-3", value),
            ));
            ok = false;
            default_priority
        }
    };

    if title.is_empty() {
        errors.push(ParseError::new(
            line_no,
            ParseErrorKind::EmptyTitle,
            format!("{} line has no title", keyword),
        ));
        ok = false;
    }

    ok.then_some((title, priority))
}

/// Split a trailing `[P<n>]` tag off the title text
fn split_priority_tag(text: &str) -> (String, PriorityTag) {
    let text = text.trim();

    if text.ends_with(']') {
        if let Some(idx) = text.rfind("[P") {
            let value = &text[idx + 2..text.len() - 1];
            let title = text[..idx].trim().to_string();
            let tag = match value.parse::<u8>().ok().and_then(Priority::new) {
                Some(priority) => PriorityTag::Valid(priority),
                None => PriorityTag::Invalid(value.to_string()),
            };
            return (title, tag);
        }
    }

    (text.to_string(), PriorityTag::Absent)
}
