// ABOUTME: Caloric CLI - command-line front-end for the caloric needs pipeline
// ABOUTME: Parses profile flags, runs the calculator, and prints text or JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Daily target for a moderately active man who wants to lose 0.5 kg/week
//! caloric-cli calculate --weight 70 --height 175 --age 30 --sex M --activity MA --goal lose --rate 0.5
//!
//! # Same, as JSON
//! caloric-cli calculate --weight 70 --height 175 --age 30 --sex M --activity MA --goal lose --rate 0.5 --format json
//!
//! # Show the activity factor and weekly rate tables in effect
//! caloric-cli tables
//! ```

mod commands;
mod helpers;

use std::process::ExitCode;

use caloric_calculator::errors::AppResult;
use caloric_calculator::logging::LoggingConfig;
use clap::{Parser, Subcommand};
use tracing::debug;

use helpers::display::{display_error, OutputFormat};

#[derive(Parser)]
#[command(
    name = "caloric-cli",
    about = "Personalized daily caloric needs calculator",
    long_about = "Computes BMI, ideal and adjusted weight, BMR, TDEE and a goal-adjusted daily calorie target from a body profile."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Run the full pipeline for one profile
    Calculate {
        /// Body weight in kilograms
        #[arg(long)]
        weight: f64,

        /// Height in centimeters
        #[arg(long)]
        height: f64,

        /// Age in years
        #[arg(long)]
        age: u32,

        /// Sex: M, F, MALE or FEMALE
        #[arg(long)]
        sex: String,

        /// Activity level code or abbreviation (S, LA, MA, VA, SA)
        #[arg(long)]
        activity: String,

        /// Weight goal: maintain, lose or gain
        #[arg(long, default_value = "maintain")]
        goal: String,

        /// Target change in kg/week (ignored for maintain)
        #[arg(long, default_value = "0")]
        rate: f64,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the activity factor and weekly rate tables
    Tables {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

impl Command {
    const fn format(&self) -> OutputFormat {
        match self {
            Self::Calculate { format, .. } | Self::Tables { format } => *format,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.verbose();
    }
    if let Err(e) = logging.init() {
        eprintln!("Warning: {e}");
    }

    let format = cli.command.format();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            display_error(&e, format);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> AppResult<()> {
    match command {
        Command::Calculate {
            weight,
            height,
            age,
            sex,
            activity,
            goal,
            rate,
            format,
        } => {
            debug!(weight, height, age, %sex, %activity, %goal, rate, "Running calculate");
            commands::calculate::run(
                commands::calculate::CalculateArgs {
                    weight_kg: weight,
                    height_cm: height,
                    age,
                    sex,
                    activity_level: activity,
                    weight_goal: goal,
                    weekly_rate_kg: rate,
                },
                format,
            )
        }
        Command::Tables { format } => commands::tables::run(format),
    }
}
