//! Basic usage example for population-rs
//!
//! This example demonstrates how to:
//! - Look up populations with the crate-level functions
//! - Hold an explicit `PopulationDb` handle
//! - Inspect what the bundled dataset contains

use population_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== population-rs Basic Usage Example ===\n");

    // Example 1: Free functions over the bundled dataset
    println!("--- Example 1: Case-insensitive lookups ---");
    for code in ["de", "DEU", "us", "chn", "xx"] {
        match get_population(code) {
            Some(population) => println!("{code:>4}: {population}"),
            None => println!("{code:>4}: not found"),
        }
    }
    println!();

    // Example 2: Restrict to one code kind
    println!("--- Example 2: Alpha-2 vs alpha-3 ---");
    println!("a2(\"de\")  = {:?}", get_population_a2("de"));
    println!("a2(\"deu\") = {:?}", get_population_a2("deu"));
    println!("a3(\"deu\") = {:?}", get_population_a3("deu"));
    println!();

    // Example 3: Explicit handle, passed to whoever needs it
    println!("--- Example 3: Explicit database handle ---");
    let db = PopulationDb::load()?;
    let stats = db.stats();
    println!("Alpha-2 codes: {}", stats.alpha_2);
    println!("Alpha-3 codes: {}", stats.alpha_3);
    println!("Combined EU-4: {}", total(db, &["de", "fr", "it", "es"]));

    Ok(())
}

fn total(db: &impl PopulationSearch, codes: &[&str]) -> u64 {
    codes.iter().filter_map(|c| db.get_population(c)).sum()
}
