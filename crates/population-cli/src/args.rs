use clap::{Parser, Subcommand};

/// CLI arguments for population-cli
#[derive(Debug, Parser)]
#[command(
    name = "population",
    version,
    about = "Look up country populations by ISO 3166 alpha-2 or alpha-3 code"
)]
pub struct CliArgs {
    /// Path to an alternative dataset (.json, or .json.gz with the `compact` feature)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Log verbosity: -v for debug, -vv for trace (RUST_LOG takes precedence)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Population for an alpha-2 or alpha-3 code (e.g. de, USA)
    Lookup { code: String },

    /// Population for an alpha-2 code only
    A2 { code: String },

    /// Population for an alpha-3 code only
    A3 { code: String },

    /// Show how many codes are loaded
    Stats,

    /// List all known codes
    Codes {
        /// List alpha-3 codes instead of alpha-2
        #[arg(long = "alpha3")]
        alpha3: bool,
    },
}
