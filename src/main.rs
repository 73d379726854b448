mod error;
mod ranking;
mod record;
mod report;
mod scanner;
mod types;

use clap::Parser;
use scanner::{ScanConfig, DEFAULT_LIMIT};
use std::path::PathBuf;
use std::process::ExitCode;

/// Find the largest files and directories under a directory
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory to scan
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Number of results to show per section
    #[arg(long, short = 'l', default_value_t = DEFAULT_LIMIT)]
    limit: usize,

    /// Print sizes in human readable units
    #[arg(long)]
    human: bool,

    /// Log progress at info level (RUST_LOG overrides)
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = ScanConfig { limit: args.limit };

    let result = match scanner::scan(&args.path, &config) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: failure in {}: {e}", args.path.display());
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = report::write_report(&mut stdout, &result, args.human) {
        eprintln!("Error writing report: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
