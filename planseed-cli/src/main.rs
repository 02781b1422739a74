//! Planseed CLI - Command line interface for planseed
//!
//! Converts markdown plan outlines into issue records for an external
//! tracker.

mod commands;

use clap::{Parser, Subcommand};
use planseed_core::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{CheckArgs, ConvertArgs};

/// Planseed: convert markdown plans into tracker issue records
#[derive(Parser, Debug)]
#[command(name = "planseed")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Default priority for untagged items (overrides config and env)
    #[arg(long, global = true)]
    default_priority: Option<u8>,

    /// Tracker binary for command-format output (overrides config and env)
    #[arg(long, global = true)]
    tracker_bin: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show version information
    Version,

    /// Convert a plan file into issue records
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Parse a plan file and report its structure without writing output
    Check(CheckArgs),

    /// Show current configuration
    Config,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    // Load configuration with overrides
    let config = Config::load_with_overrides(cli.default_priority, cli.tracker_bin.clone())?;

    if cli.verbose {
        tracing::info!(
            default_priority = %config.plan.default_priority,
            tracker_bin = %config.tracker.bin,
            "Configuration loaded"
        );
    }

    match cli.command {
        Some(Commands::Version) => {
            println!("planseed {}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::Convert(args)) => {
            args.execute(cli.verbose, &config)?;
        }
        Some(Commands::Check(args)) => {
            args.execute(cli.verbose, &config)?;
        }
        Some(Commands::Config) => {
            println!("Planseed Configuration");
            println!("======================");
            println!();
            println!("Plan Settings:");
            println!("  default_priority: {}", config.plan.default_priority);
            println!();
            println!("Tracker Settings:");
            println!("  bin: {}", config.tracker.bin);
            println!();
            if let Some(path) = Config::default_config_path() {
                println!("Config file: {}", path.display());
                if path.exists() {
                    println!("  (exists)");
                } else {
                    println!("  (not found - using defaults)");
                }
            }
        }
        None => {
            println!("Planseed - convert markdown plans into tracker issue records");
            println!();
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
