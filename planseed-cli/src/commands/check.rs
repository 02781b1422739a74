//! Plan check command

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use planseed_core::{parse_plan, Config, IssueKind};

/// Parse a plan file and report its structure without writing output
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to plan file
    #[arg(short, long, default_value = "PLAN.md")]
    pub file: PathBuf,
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self, verbose: bool, config: &Config) -> anyhow::Result<()> {
        let content = std::fs::read_to_string(&self.file)
            .with_context(|| format!("Cannot read plan file: {}", self.file.display()))?;

        let outcome = parse_plan(&content, config.plan.default_priority);

        println!(
            "Parsed {}: {} item(s), {} error(s)",
            self.file.display(),
            outcome.items.len(),
            outcome.errors.len()
        );
        println!();

        for item in &outcome.items {
            let indent = match item.kind {
                IssueKind::Feature => "",
                IssueKind::Task => "  ",
                IssueKind::Subtask => "    ",
            };
            println!("{}{} [P{}] {}", indent, item.kind, item.priority, item.title);

            if verbose {
                for note in &item.notes {
                    println!("{}    note: {}", indent, note);
                }
            }
        }

        super::report_errors(&outcome)
    }
}
