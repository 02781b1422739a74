//! Plan conversion command

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, ValueEnum};
use planseed_core::{build_records, parse_plan, write_commands, write_jsonl, Config, IssueRecord};

/// Convert a plan file into issue records
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Path to plan file
    #[arg(short, long, default_value = "PLAN.md")]
    pub file: PathBuf,

    /// Output path (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "jsonl")]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per line, for tracker import
    Jsonl,
    /// One tracker CLI invocation per line
    Commands,
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self, verbose: bool, config: &Config) -> anyhow::Result<()> {
        let content = std::fs::read_to_string(&self.file)
            .with_context(|| format!("Cannot read plan file: {}", self.file.display()))?;

        let outcome = parse_plan(&content, config.plan.default_priority);
        let records = build_records(&outcome.items, &source_marker(&self.file));

        if verbose {
            for record in &records {
                tracing::info!(kind = %record.kind, title = %record.title, "Parsed item");
            }
        }

        match &self.output {
            Some(path) => {
                let mut file = File::create(path)
                    .with_context(|| format!("Cannot create output file: {}", path.display()))?;
                self.write_records(&records, config, &mut file)?;

                eprintln!(
                    "Wrote {} record(s) from {} to {}",
                    records.len(),
                    self.file.display(),
                    path.display()
                );
            }
            None => {
                let stdout = std::io::stdout();
                let mut lock = stdout.lock();
                self.write_records(&records, config, &mut lock)?;
            }
        }

        super::report_errors(&outcome)
    }

    fn write_records<W: Write>(
        &self,
        records: &[IssueRecord],
        config: &Config,
        writer: &mut W,
    ) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Jsonl => write_jsonl(records, writer)?,
            OutputFormat::Commands => write_commands(records, &config.tracker.bin, writer)?,
        }
        Ok(())
    }
}

/// Plan file name carried on every record for traceability
fn source_marker(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_marker_uses_file_name() {
        assert_eq!(source_marker(Path::new("plans/PLAN.md")), "PLAN.md");
    }
}
