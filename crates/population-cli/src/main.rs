//! population-cli: command-line front end for population-core
//!
//! Usage examples
//! --------------
//!
//! - Population for either kind of code (case-insensitive)
//!   $ population lookup de
//!   $ population lookup USA
//!
//! - Restrict the lookup to one code kind
//!   $ population a2 ch
//!   $ population a3 che
//!
//! - Inspect the loaded dataset
//!   $ population stats
//!   $ population codes --alpha3
//!
//! By default the dataset bundled with `population-core` is used. Point
//! `--input <path>` at another file with the same layout to override it.
mod args;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use population_core::{PopulationDb, PopulationSearch};
use std::borrow::Cow;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn open_db(input: Option<&str>) -> anyhow::Result<Cow<'static, PopulationDb>> {
    match input {
        #[cfg(feature = "json")]
        Some(path) => Ok(Cow::Owned(PopulationDb::load_from_path(path)?)),
        #[cfg(not(feature = "json"))]
        Some(_) => anyhow::bail!("--input requires the `json` feature"),
        None => Ok(Cow::Borrowed(PopulationDb::load()?)),
    }
}

fn print_hit(code: &str, hit: Option<u64>) -> ExitCode {
    match hit {
        Some(population) => {
            println!("{population}");
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("No population found for: {code}");
            ExitCode::FAILURE
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let db = open_db(args.input.as_deref())?;

    let code = match args.command {
        Commands::Lookup { code } => print_hit(&code, db.get_population(&code)),
        Commands::A2 { code } => print_hit(&code, db.get_population_a2(&code)),
        Commands::A3 { code } => print_hit(&code, db.get_population_a3(&code)),
        Commands::Stats => {
            let stats = db.stats();
            println!("Dataset statistics:");
            println!("  Alpha-2 codes: {}", stats.alpha_2);
            println!("  Alpha-3 codes: {}", stats.alpha_3);
            ExitCode::SUCCESS
        }
        Commands::Codes { alpha3 } => {
            let codes = if alpha3 {
                db.alpha_3_codes()
            } else {
                db.alpha_2_codes()
            };
            for code in codes {
                println!("{code}");
            }
            ExitCode::SUCCESS
        }
    };

    Ok(code)
}
