//! CLI for the Bug Status Reader.
//!
//! Reads a problem list, queries the bug tracker for every issue it names,
//! and generates HTML reports of fixed and test-related issues.

use bug_status_reader::{
    load_config, LinePolicy, RunSummary, Runner, RunnerConfig, RunnerError, TrackerConfig,
};
use clap::{CommandFactory, Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Bug Status Reader - check a problem list against the bug tracker and report fixed and test issues.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the problem list.
    #[arg(long = "pl")]
    problem_list: Option<PathBuf>,

    /// Directory to which reports are stored.
    #[arg(short = 'r', long = "results", default_value = "out")]
    results: PathBuf,

    /// How issue keys are extracted from problem-list lines.
    #[arg(long, value_enum)]
    line_policy: Option<LinePolicyArg>,

    /// Maximum concurrent tracker requests.
    #[arg(long, default_value_t = 1)]
    concurrency: usize,

    /// Path to an optional tracker configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
}

/// CLI surface of the two extraction policies.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum LinePolicyArg {
    /// Whitespace-separated records with comma-separated numeric ids.
    TokenList,
    /// Comment lines embedding a tracker browse URL.
    CommentUrl,
}

impl From<LinePolicyArg> for LinePolicy {
    fn from(arg: LinePolicyArg) -> Self {
        match arg {
            LinePolicyArg::TokenList => LinePolicy::TokenList,
            LinePolicyArg::CommentUrl => LinePolicy::CommentUrl,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    // Without a problem list there is nothing to do; print usage and exit
    // cleanly, as the tool always has.
    let Some(problem_list) = args.problem_list.clone() else {
        let mut command = Args::command();
        let _ = command.print_help();
        return ExitCode::from(0);
    };

    // Run the main logic
    match run(args, problem_list).await {
        Ok(summary) => {
            print_summary(&summary);

            if summary.has_failures() {
                ExitCode::from(1)
            } else {
                ExitCode::from(0)
            }
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        // Use compact formatting without module target paths for cleaner output
        .with(fmt::layer().compact().with_target(false))
        // Allow runtime log filtering via RUST_LOG env var (e.g., RUST_LOG=debug)
        // Falls back to "info" level if RUST_LOG is not set or invalid
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        // Register as the global default subscriber
        .init();
}

/// Main execution logic.
async fn run(args: Args, problem_list: PathBuf) -> Result<RunSummary, RunnerError> {
    let mut tracker = match &args.config {
        Some(path) => load_config(path)?,
        None => TrackerConfig::default(),
    };
    if let Some(policy) = args.line_policy {
        tracker.line_policy = policy.into();
    }

    let config = RunnerConfig::new(problem_list, args.results)
        .with_tracker(tracker)
        .with_concurrency(args.concurrency);
    let runner = Runner::new(config)?;
    runner.run().await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!("  Lines read: {}", summary.lines_read);
    println!("  Issue keys extracted: {}", summary.keys_extracted);
    println!("  Keys failed: {}", summary.keys_failed);
    println!("  Issues returned: {}", summary.records_seen);
    println!("  Fixed-issue rows: {}", summary.fixed_rows);
    println!("  Test-issue rows: {}", summary.test_rows);
}
