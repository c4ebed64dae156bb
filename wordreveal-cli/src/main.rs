//! `wordreveal` command-line entry point

use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::process::ExitCode;
use wordreveal_cli::commands::{AppContext, Commands};
use wordreveal_cli::config::CliConfig;
use wordreveal_cli::logging::init_logging;
use wordreveal_cli::CliResult;
use wordreveal_core::FileStore;

/// Progressive text reveal for active-recall study
#[derive(Debug, Parser)]
#[command(name = "wordreveal", version, about, long_about = None)]
struct Cli {
    /// Directory holding settings and session
    #[arg(long, global = true, value_name = "DIR", env = "WORDREVEAL_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Suppress log output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

fn run(cli: Cli) -> CliResult<()> {
    let config = CliConfig::load(cli.config.as_deref())?;
    let data_dir = config.data_dir(cli.data_dir.as_deref());

    // The study screen owns the terminal, so its log goes to a file
    let log_dir = cli.command.is_interactive().then_some(data_dir.as_path());
    init_logging(cli.verbose, cli.quiet, log_dir)?;
    log::debug!("Data directory: {}", data_dir.display());

    let ctx = AppContext::new(config, FileStore::new(data_dir));
    cli.command.execute(&ctx)
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
