//! CLI definition using clap

use boq_types::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "boq-estimator")]
#[command(version)]
#[command(about = "Construction material quantity and cost estimation from floor plans")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Prediction service URL override
    #[arg(long, global = true)]
    pub predictor_url: Option<String>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Where to write the report besides stdout
#[derive(Args, Debug, Clone, Default)]
pub struct ExportArgs {
    /// Write an Excel workbook
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Write a CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate costs for a floor plan image via the prediction service
    Estimate {
        /// Path to image file
        image: PathBuf,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// Estimate costs from manually entered building attributes
    #[command(allow_negative_numbers = true)]
    Calc {
        /// Floor area in square feet
        #[arg(long)]
        square_feet: f64,

        /// Number of bedrooms
        #[arg(long)]
        beds: f64,

        /// Number of bathrooms
        #[arg(long)]
        baths: f64,

        /// Number of garages
        #[arg(long)]
        garages: f64,

        /// Predicted total build cost (USD)
        #[arg(long)]
        estimated_cost: f64,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// Estimate costs from a saved prediction JSON file
    FromJson {
        /// Path to prediction JSON
        file: PathBuf,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// Estimate every image in a folder
    Batch {
        /// Path to folder containing images
        folder: PathBuf,

        /// Output file for results (JSON)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Export a saved JSON report to Excel or CSV
    Export {
        /// Path to JSON report file
        report: PathBuf,

        /// Output file (.xlsx or .csv)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set prediction service URL
        #[arg(long)]
        set_predictor_url: Option<String>,

        /// Set request timeout in seconds
        #[arg(long)]
        set_timeout: Option<u64>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
