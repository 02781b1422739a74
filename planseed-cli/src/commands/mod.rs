//! CLI command implementations

pub mod check;
pub mod convert;

pub use check::CheckArgs;
pub use convert::ConvertArgs;

use planseed_core::ParseOutcome;

/// Print collected parse errors to stderr and return an error when any exist.
///
/// Valid records are written regardless; the exit code alone reflects whether
/// the plan parsed cleanly.
pub fn report_errors(outcome: &ParseOutcome) -> anyhow::Result<()> {
    if outcome.is_clean() {
        return Ok(());
    }

    eprintln!();
    eprintln!("Errors:");
    for err in &outcome.errors {
        eprintln!("  {}", err);
    }

    anyhow::bail!("{} parse error(s)", outcome.errors.len())
}
