//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command-line arguments for the take-off tool
#[derive(Parser, Debug)]
#[command(name = "takeoffkit", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print formula lines and category totals of a project
    Report {
        /// Project file to read
        project: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Configuration file (JSON or TOML) with the color table
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Compute a roof slope multiplier from rise and run
    Slope {
        /// Rise
        #[arg(long)]
        height: f64,

        /// Run, must be positive
        #[arg(long)]
        base: f64,
    },

    /// Evaluate an arithmetic expression
    Eval {
        /// Expression such as `2.5*4` or `sqrt(2)`
        expr: String,
    },

    /// Write one SVG overlay per annotated page
    Export {
        /// Project file to read
        project: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = "overlays")]
        output: PathBuf,
    },
}
