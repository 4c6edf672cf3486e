use super::commands;
use clap::{Parser, Subcommand, ValueEnum};
use socn_core::DEFAULT_MAX_LAG;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One row per sequence, one column per coupling number
    Csv,
    /// Array of `{id, socn}` objects
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute sequence-order coupling numbers for every record of a FASTA file
    Compute {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
        /// Largest lag; every sequence must be at least this long
        #[arg(long, default_value_t = DEFAULT_MAX_LAG)]
        max_lag: usize,
        #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,
        /// Log and drop records that cannot be computed instead of failing
        #[arg(long)]
        skip_invalid: bool,
    },
}

impl Cli {
    pub fn execute(self) -> anyhow::Result<()> {
        match self.command {
            Commands::Compute {
                input,
                output,
                max_lag,
                format,
                skip_invalid,
            } => commands::compute::execute(input, output, max_lag, format, skip_invalid),
        }
    }
}
