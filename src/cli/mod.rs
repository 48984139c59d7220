pub mod batch;
pub mod config;
pub mod convert;
pub mod detect;
pub mod formats;
pub mod prompt;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "cardnorm",
    version,
    about = "Normalize credit card statement exports from IDFC, HDFC, ICICI and Axis."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Standardize a single statement CSV.
    Convert {
        /// Statement CSV to read (prompted for when omitted)
        file: Option<String>,
        /// Directory for the standardized file (default from settings)
        #[arg(long = "output-dir")]
        output_dir: Option<String>,
        /// Force a layout instead of detecting it: idfc, hdfc, icici, axis
        #[arg(long)]
        format: Option<String>,
    },
    /// Standardize every .csv file in a directory.
    Batch {
        /// Directory of statement CSVs
        input_dir: String,
        /// Directory for the standardized files (default from settings)
        #[arg(long = "output-dir")]
        output_dir: Option<String>,
    },
    /// Show which layout a statement is detected as.
    Detect {
        /// Statement CSV to inspect
        file: String,
    },
    /// List supported statement layouts in detection order.
    Formats,
    /// Show settings, or change the default output directory.
    Config {
        /// New default output directory
        #[arg(long = "output-dir")]
        output_dir: Option<String>,
    },
}
