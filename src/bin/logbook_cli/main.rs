// ABOUTME: Logbook CLI - parses meal and workout text and runs the training calculators
// ABOUTME: Prints JSON results to stdout; logs go to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Parse a meal description
//! logbook-cli food "2 rotis, dal fry, glass of milk"
//!
//! # Parse a training program from a file, never calling a provider
//! logbook-cli --local-only workout --file program.txt
//!
//! # Estimate a one-rep max
//! logbook-cli one-rep-max --weight 100 --reps 10
//!
//! # Score this morning's recovery
//! logbook-cli recovery --sleep-hours 7.5 --sleep-quality 4 --stress 2 --mood 4 --soreness 2 --energy 4
//!
//! # Search the reference food table
//! logbook-cli foods paneer
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pierre_logbook::config::LogbookConfig;
use pierre_logbook::constants::food::DEFAULT_SEARCH_LIMIT;
use pierre_logbook::intelligence::RecoveryInputs;
use pierre_logbook::logging::LoggingConfig;
use pierre_logbook::TieredResolver;
use tracing::debug;

use commands::metrics::{ActivityArg, SexArg};
use helpers::display::OutputFormat;

#[derive(Parser)]
#[command(
    name = "logbook-cli",
    about = "Pierre Logbook CLI",
    long_about = "Turn meal and workout text into structured records and run the training calculators."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Never call a remote provider, even when API keys are set
    #[arg(long, global = true)]
    local_only: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "json", global = true)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Parse a meal description into items and macros
    Food {
        /// Meal text, or `-` to read stdin
        text: Option<String>,

        /// Read the meal text from a file
        #[arg(long, short = 'f')]
        file: Option<PathBuf>,
    },

    /// Parse a plain-text training program into days and exercises
    Workout {
        /// Program text, or `-` to read stdin
        text: Option<String>,

        /// Read the program from a file
        #[arg(long, short = 'f')]
        file: Option<PathBuf>,
    },

    /// Estimate a one-rep max with the Epley formula
    OneRepMax {
        /// Load lifted (kg)
        #[arg(long)]
        weight: f64,

        /// Reps completed
        #[arg(long)]
        reps: u32,

        /// Working sets, to also report training volume
        #[arg(long)]
        sets: Option<u32>,
    },

    /// Score recovery from sleep and 1-5 wellness ratings
    Recovery {
        /// Hours slept
        #[arg(long)]
        sleep_hours: f64,

        /// Sleep quality (1-5)
        #[arg(long)]
        sleep_quality: u8,

        /// Stress (1-5, 5 is most stressed)
        #[arg(long)]
        stress: u8,

        /// Mood (1-5)
        #[arg(long)]
        mood: u8,

        /// Soreness (1-5, 5 is most sore)
        #[arg(long)]
        soreness: u8,

        /// Energy (1-5)
        #[arg(long)]
        energy: u8,
    },

    /// Check a weigh-in log for a plateau
    Plateau {
        /// File with one `YYYY-MM-DD,kg` line per weigh-in, oldest first
        #[arg(long, short = 'f')]
        file: PathBuf,
    },

    /// Basal metabolic rate and daily energy expenditure
    Energy {
        /// Body weight (kg)
        #[arg(long)]
        weight: f64,

        /// Height (cm)
        #[arg(long)]
        height: f64,

        /// Age (years)
        #[arg(long)]
        age: u32,

        /// Biological sex
        #[arg(long, value_enum)]
        sex: SexArg,

        /// Activity level
        #[arg(long, value_enum, default_value = "moderately-active")]
        activity: ActivityArg,
    },

    /// Search the reference food table
    Foods {
        /// Key or name fragment; lists every food when omitted
        query: Option<String>,

        /// Maximum number of results
        #[arg(long, default_value_t = DEFAULT_SEARCH_LIMIT)]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Missing .env is normal; keys may come from the real environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = LogbookConfig::from_env()?;
    let logging = LoggingConfig::from_env(config.log_level);
    if cli.verbose {
        logging.verbose()
    } else {
        logging
    }
    .init()?;

    if cli.local_only {
        config = config.local_only();
    }
    debug!(config = %config.summary(), "Configuration loaded");

    match cli.command {
        Command::Food { text, file } => {
            let resolver = TieredResolver::from_config(&config)?;
            commands::parse::food(&resolver, text, file, cli.format).await?;
        }
        Command::Workout { text, file } => {
            let resolver = TieredResolver::from_config(&config)?;
            commands::parse::workout(&resolver, text, file, cli.format).await?;
        }
        Command::OneRepMax { weight, reps, sets } => {
            commands::metrics::one_rep_max(weight, reps, sets, cli.format)?;
        }
        Command::Recovery {
            sleep_hours,
            sleep_quality,
            stress,
            mood,
            soreness,
            energy,
        } => {
            let inputs = RecoveryInputs {
                sleep_hours,
                sleep_quality,
                stress_level: stress,
                mood,
                soreness,
                energy_level: energy,
            };
            commands::metrics::recovery(&inputs, cli.format)?;
        }
        Command::Plateau { file } => {
            commands::metrics::plateau(&file, cli.format).await?;
        }
        Command::Energy {
            weight,
            height,
            age,
            sex,
            activity,
        } => {
            commands::metrics::energy(weight, height, age, sex, activity, cli.format)?;
        }
        Command::Foods { query, limit } => {
            commands::parse::foods(query.as_deref(), limit, cli.format)?;
        }
    }

    Ok(())
}
