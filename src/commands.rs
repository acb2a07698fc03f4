use clap::{Parser, Subcommand, command};
use mock_table::OutputFormat;

use std::path::PathBuf;

#[derive(Parser)]
#[command()]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a table of mock people
    Render {
        /// The number of rows; invalid values fall back to 100
        #[arg(short, long, allow_hyphen_values = true)]
        count: Option<String>,
        /// The output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
        format: OutputFormat,
        /// Seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
