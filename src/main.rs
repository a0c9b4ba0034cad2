mod orbit;
mod plot;
mod poller;
mod state;
mod web;

use clap::{Parser, Subcommand};
use std::fs;
use std::process::ExitCode;

use crate::orbit::{parse_tle_lines, OrbitalStats, Propagator};
use crate::web::Config;

#[derive(Parser)]
#[command(name = "globetrack")]
#[command(about = "Live satellite position dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the dashboard web server
    Serve {
        /// YAML config file; built-in defaults when omitted
        #[arg(long)]
        config: Option<String>,
    },
    /// Parse a TLE file and print its derived orbital stats
    Validate { tle: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => serve(config.as_deref()).await,
        Commands::Validate { tle } => validate(&tle),
    }
}

async fn serve(config_path: Option<&str>) -> ExitCode {
    let config = match config_path {
        Some(path) => match Config::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error reading config: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => Config::default(),
    };

    match web::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn validate(path: &str) -> ExitCode {
    let text = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error reading file: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let (name, line1, line2) = match parse_tle_lines(&text) {
        Ok(parts) => parts,
        Err(e) => {
            eprintln!("Parse error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Stats come from the fixed columns; the propagator parse confirms the
    // element set is usable for sampling too.
    let stats = match OrbitalStats::from_tle_lines(&line1, &line2) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Parse error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = Propagator::from_tle(&text) {
        eprintln!("Parse error: {}", e);
        return ExitCode::FAILURE;
    }

    println!(
        "Element set is valid ({})",
        name.as_deref().unwrap_or("unnamed")
    );
    println!("  period:       {:.2} min", stats.period_minutes);
    println!("  inclination:  {:.4} deg", stats.inclination_deg);
    println!("  eccentricity: {:.7}", stats.eccentricity);
    println!("  mean motion:  {:.8} rev/day", stats.mean_motion_rev_day);
    println!("  epoch:        {}", stats.epoch);
    ExitCode::SUCCESS
}
