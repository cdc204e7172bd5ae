mod app;
mod data;
mod stats;
mod ui;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

/// Interactive explorer for US bikeshare trip data.
///
/// Prompts for a city, month, and day-of-week, then reports travel-time,
/// station, duration, and user statistics over the matching trips.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Directory containing the city CSV files
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    match app::run(&args.data_dir) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
