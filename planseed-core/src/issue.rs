//! Issue records emitted for the external tracker
//!
//! One record per Feature/Task/Subtask plan item, in plan order. The tracker
//! has no guaranteed parent-link field, so parent references travel as a
//! `Parent: <title>` line inside the description.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::plan::PlanItem;
use crate::Result;

/// Kind of an issue record, mapped one-to-one from the plan item kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    Feature,
    Task,
    Subtask,
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Feature => write!(f, "feature"),
            Self::Task => write!(f, "task"),
            Self::Subtask => write!(f, "subtask"),
        }
    }
}

/// Issue priority, 1 (highest) through 3
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Priority(u8);

impl Priority {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 3;

    /// Create a priority, rejecting values outside 1..=3
    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self(2)
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority.0
    }
}

impl TryFrom<u8> for Priority {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("priority must be 1-3, got {}", value))
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One unit of trackable work, ready for import
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRecord {
    /// Title, exactly as written in the plan
    pub title: String,
    /// Record type understood by the tracker
    #[serde(rename = "type")]
    pub kind: IssueKind,
    /// Resolved priority (tag value or the configured default)
    pub priority: Priority,
    /// Notes plus parent reference, see [`synthesize_description`]
    pub description: String,
    /// Name of the plan file the record came from
    pub source: String,
}

/// Combine a plan item's notes and parent reference into one description.
///
/// Notes come first, joined with `; ` in encounter order; the
/// `Parent: <title>` line follows on its own line when a parent exists.
pub fn synthesize_description(notes: &[String], parent: Option<&str>) -> String {
    let mut parts = Vec::new();
    if !notes.is_empty() {
        parts.push(notes.join("; "));
    }
    if let Some(parent) = parent {
        parts.push(format!("Parent: {}", parent));
    }
    parts.join("\n")
}

/// Build issue records from parsed plan items, preserving plan order
pub fn build_records(items: &[PlanItem], source: &str) -> Vec<IssueRecord> {
    items
        .iter()
        .map(|item| IssueRecord {
            title: item.title.clone(),
            kind: item.kind,
            priority: item.priority,
            description: synthesize_description(&item.notes, item.parent.as_deref()),
            source: source.to_string(),
        })
        .collect()
}

/// Write records as JSON Lines: one compact object per line.
///
/// Field order follows the struct definition, so the same input always
/// produces byte-identical output.
pub fn write_jsonl<W: Write>(records: &[IssueRecord], writer: &mut W) -> Result<()> {
    for record in records {
        serde_json::to_writer(&mut *writer, record)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Render one record as a tracker CLI invocation
pub fn render_command(record: &IssueRecord, tracker_bin: &str) -> String {
    let mut command = format!("{} create {}", tracker_bin, sh_quote(&record.title));
    if !record.description.is_empty() {
        command.push_str(&format!(" --description {}", sh_quote(&record.description)));
    }
    command.push_str(&format!(
        " -p {} -t {} --json",
        record.priority, record.kind
    ));
    command
}

/// Write records as tracker CLI invocations, one per line
pub fn write_commands<W: Write>(
    records: &[IssueRecord],
    tracker_bin: &str,
    writer: &mut W,
) -> Result<()> {
    for record in records {
        writeln!(writer, "{}", render_command(record, tracker_bin))?;
    }
    Ok(())
}

/// Quote a value for a POSIX shell
fn sh_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "'\\''"))
}
