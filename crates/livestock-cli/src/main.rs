//! livestock-ghg
//!
//! Runs livestock greenhouse-gas scenarios stored as JSON through the
//! livestock-core models and prints a report.

mod report;
mod sample;
mod scenario;

use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use serde::Serialize;

use livestock_core::buffalo::compare;
use livestock_core::buffalo::run as buffalo;
use livestock_core::emissions::run as emissions;
use livestock_core::energy::run as energy;
use livestock_core::reproduction::run as reproduction;

#[derive(Parser)]
#[command(name = "livestock-ghg")]
#[command(about = "Bioenergetic greenhouse-gas model for cattle and buffalo")]
struct Cli {
    /// Print results as JSON instead of a text report
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Energy requirements, enteric methane and feed intake
    Energy {
        /// Scenario file (energy parameters)
        scenario: PathBuf,
    },

    /// Calving-rate and calving-interval projection
    Reproduction {
        /// Scenario file (reproductive parameters)
        scenario: PathBuf,
    },

    /// Total annual emissions by source
    Emissions {
        /// Scenario file (energy parameters plus manure/production system)
        scenario: PathBuf,
    },

    /// Full buffalo profile
    Buffalo {
        /// Scenario file (buffalo parameters)
        scenario: PathBuf,
    },

    /// Compare a buffalo with a cattle profile
    Compare {
        /// Scenario file with `buffalo` and optional `cattle` sections
        scenario: PathBuf,
    },

    /// Print an example scenario file
    Sample {
        #[arg(value_enum)]
        kind: SampleKind,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SampleKind {
    Energy,
    Reproduction,
    Emissions,
    Buffalo,
    Compare,
}

fn emit<T: Serialize>(
    json: bool,
    value: &T,
    text: impl FnOnce(&T) -> Result<String, fmt::Error>,
) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", text(value)?);
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Energy { scenario } => {
            let params = scenario::load_energy(&scenario)?;
            let metrics =
                energy::calculate_animal_energy(&params).context("energy calculation failed")?;
            emit(cli.json, &metrics, report::energy)?;
        }

        Commands::Reproduction { scenario } => {
            let params = scenario::load_reproduction(&scenario)?;
            let metrics = reproduction::calculate_reproductive_impact(&params)
                .context("reproductive projection failed")?;
            emit(cli.json, &metrics, report::reproduction)?;
        }

        Commands::Emissions { scenario } => {
            let params = scenario::load_emissions(&scenario)?;
            let metrics = emissions::calculate_total_emissions(&params)
                .context("emissions calculation failed")?;
            emit(cli.json, &metrics, report::emissions)?;
        }

        Commands::Buffalo { scenario } => {
            let params = scenario::load_buffalo(&scenario)?;
            let metrics = buffalo::calculate_buffalo_metrics(&params)
                .context("buffalo calculation failed")?;
            emit(cli.json, &metrics, report::buffalo)?;
        }

        Commands::Compare { scenario } => {
            let (b, c) = scenario::load_compare(&scenario)?;
            info!(
                "comparing {} with {} cattle",
                b.buffalo_type, c.energy.category
            );
            let result =
                compare::compare_buffalo_to_cattle(&b, &c).context("comparison failed")?;
            emit(cli.json, &result, report::comparison)?;
        }

        Commands::Sample { kind } => {
            let text = match kind {
                SampleKind::Energy => sample::energy(),
                SampleKind::Reproduction => sample::reproduction(),
                SampleKind::Emissions => sample::emissions(),
                SampleKind::Buffalo => sample::buffalo(),
                SampleKind::Compare => sample::compare(),
            }?;
            println!("{}", text);
        }
    }

    Ok(())
}
