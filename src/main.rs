use jsxfix_cli::{check, fix, load_config, logging, print_report, print_report_json};

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit status when the marker line is missing and the file was left alone.
const EXIT_MARKER_NOT_FOUND: u8 = 2;

#[derive(Parser)]
#[command(
    name = "jsxfix-cli",
    version,
    about = "Report JSX tag balance and cut a source file after its export line"
)]
struct Cli {
    /// Config file (defaults to the per-user jsxfix/config.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// File to inspect and truncate
    #[arg(long, global = true, env = "JSXFIX_TARGET")]
    target: Option<PathBuf>,
    /// Tag name to count; repeat to track several (replaces the configured list)
    #[arg(long = "tag", global = true)]
    tags: Vec<String>,
    /// Text identifying the last line to keep
    #[arg(long, global = true)]
    marker: Option<String>,
    /// Print the report as JSON
    #[arg(long, global = true)]
    json: bool,
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Explicit log level or filter (e.g. info, jsxfix_cli=trace)
    #[arg(long, global = true)]
    log_level: Option<String>,
    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    log_json: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Count tags, then truncate the file after the marker line (default)
    Fix {
        /// Report what would be cut without writing the file
        #[arg(long)]
        dry_run: bool,
    },
    /// Count tags and locate the marker without modifying anything
    Check,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }

    let mut config = load_config(cli.config.as_deref())?;
    config.apply_overrides(cli.target, cli.tags, cli.marker);

    let report = match cli.command {
        Some(Commands::Check) => check(&config)?,
        Some(Commands::Fix { dry_run }) => fix(&config, dry_run)?,
        None => fix(&config, false)?,
    };

    if cli.json {
        print_report_json(&report)?;
    } else {
        print_report(&report);
    }

    if report.marker_found() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_MARKER_NOT_FOUND))
    }
}
