use crate::types::OutputFormat;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "odolog")]
#[command(about = "Track vehicle consumable parts and service history", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Path to the JSON data file (default: car_maintenance_data.json, or $ODOLOG_DB)"
    )]
    pub db: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Overwrite the current odometer reading (lower readings are rejected)")]
    SetMileage {
        #[arg(help = "New odometer reading in km")]
        mileage: u64,
    },

    #[command(about = "Start tracking a consumable part")]
    AddPart {
        #[arg(help = "Part name, unique among tracked parts")]
        name: String,

        #[arg(help = "Distance between changes in km")]
        interval: u64,

        #[arg(help = "Odometer reading at the last change in km")]
        last_change: u64,

        #[arg(long)]
        notes: Option<String>,
    },

    #[command(about = "Record a change of a tracked part (lower readings are rejected)")]
    ChangePart {
        name: String,

        #[arg(help = "Odometer reading at the change in km")]
        mileage: u64,

        #[arg(long, help = "Replace the stored notes")]
        notes: Option<String>,
    },

    #[command(about = "Show every tracked part with its remaining distance, most urgent first")]
    Due {
        #[arg(long, help = "Compute the report at a hypothetical odometer reading")]
        at: Option<u64>,
    },

    #[command(about = "Log a service event with a tool-assigned timestamp")]
    LogService {
        description: String,

        #[arg(help = "Odometer reading at the time of service in km")]
        mileage: u64,

        #[arg(long)]
        cost: Option<f64>,

        #[arg(long)]
        details: Option<String>,
    },

    #[command(about = "Show the service log in the order it was recorded")]
    History,
}
