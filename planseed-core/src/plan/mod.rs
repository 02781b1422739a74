//! Plan document model and parser

mod parser;

pub use parser::{parse_plan, ParseOutcome, PlanItem};
