//! Planseed Core - plan-to-issue conversion library
//!
//! Parses a markdown plan outline (Features, Tasks, Subtasks with priority
//! tags and notes) into an ordered sequence of issue records ready for an
//! external tracker's import.

pub mod config;
pub mod error;
pub mod issue;
pub mod plan;

pub use config::Config;
pub use error::{Error, ParseError, ParseErrorKind, Result};
pub use issue::{build_records, write_commands, write_jsonl, IssueKind, IssueRecord, Priority};
pub use plan::{parse_plan, ParseOutcome, PlanItem};
