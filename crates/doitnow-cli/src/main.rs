//! DoItNow CLI
//!
//! Command-line front end for the local task list

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use doitnow_core::logging_facility::{self, Profile};
use doitnow_core::SystemClock;
use doitnow_engine::AppState;

mod commands;
mod output;

use output::Output;

#[derive(Debug, Parser)]
#[command(name = "doitnow")]
#[command(about = "DoItNow - tasks, categories and streaks in a local SQLite file", long_about = None)]
struct Cli {
    /// Database file; created with its parent directory on first use
    #[arg(
        long,
        global = true,
        env = "DOITNOW_DB",
        default_value = ".doitnow/doitnow.db"
    )]
    db: PathBuf,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Format of diagnostic logs written to stderr
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Task operations
    Task(commands::task::TaskArgs),
    /// Category operations
    Category(commands::category::CategoryArgs),
    /// Completion statistics
    Stats(commands::stats::StatsArgs),
    /// User preferences
    Settings(commands::settings::SettingsArgs),
}

fn main() {
    let cli = Cli::parse();

    logging_facility::init(match cli.log_format {
        LogFormat::Pretty => Profile::Cli,
        LogFormat::Json => Profile::CliJson,
    });

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let out = Output::new(cli.json);
    let mut state = AppState::init(&cli.db, Box::new(SystemClock))?;

    match cli.command {
        Commands::Task(args) => commands::task::execute(args, &mut state, &out),
        Commands::Category(args) => commands::category::execute(args, &mut state, &out),
        Commands::Stats(args) => commands::stats::execute(args, &mut state, &out),
        Commands::Settings(args) => commands::settings::execute(args, &mut state, &out),
    }
}
