use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "openmeteo-aggregator")]
#[command(about = "Aggregate Open-Meteo hourly weather CSV exports")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Filter rows by date range and day/night flag, then aggregate one metric
    Aggregate {
        #[arg(help = "Path to the CSV export")]
        file: PathBuf,

        #[arg(help = "Start date (inclusive), YYYY-MM-DD")]
        start_date: NaiveDate,

        #[arg(help = "End date (exclusive), YYYY-MM-DD")]
        end_date: NaiveDate,

        #[arg(
            help = "Metric name: temperature_2m, pressure_msl, wind_speed_10m or direct_normal_irradiance_instant"
        )]
        metric: String,

        #[arg(help = "Row selector: DAY or NIGHT")]
        selector: String,

        #[arg(help = "Aggregation: SUM, AVG, MIN or MAX")]
        aggregation: String,
    },

    /// Print the contents of a small text file
    Cat {
        #[arg(help = "Path to the file to print (at most 3072 bytes)")]
        file: PathBuf,
    },
}
