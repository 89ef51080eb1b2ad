//! PD-TSP Result Comparator - Command Line Interface
//! 
//! Compares the output of the solver version under test against a reference
//! output. Exit status: 0 when they match, 1 when they differ (the current
//! output is printed), 2 on any error.

use clap::Parser;
use pdtsp_compare::compare::compare;

use std::path::PathBuf;
use std::process::ExitCode;

/// Exit status for unreadable, invalid or malformed inputs
const ERROR_EXIT_CODE: u8 = 2;

#[derive(Parser)]
#[command(name = "pdtsp-compare")]
#[command(version)]
#[command(about = "Compare two outputs from pdtsp solvers.")]
struct Cli {
    /// Current version output
    #[arg(long, value_name = "PATH")]
    current: PathBuf,

    /// Expected version output
    #[arg(long, value_name = "PATH")]
    expected: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();
    
    let cli = Cli::parse();
    log::debug!("Comparing {:?} against {:?}", cli.current, cli.expected);
    
    let mut stdout = std::io::stdout().lock();
    match compare(&cli.current, &cli.expected, &mut stdout) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(ERROR_EXIT_CODE)
        }
    }
}
