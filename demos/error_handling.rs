//! Error handling example for population-rs
//!
//! Loading can fail; lookups cannot. This example shows both sides.

use population_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== population-rs Error Handling Example ===\n");

    // Example 1: Handling dataset load errors
    println!("--- Example 1: Loading a dataset that does not exist ---");
    match PopulationDb::load_from_path("does/not/exist.json") {
        Ok(_) => println!("  unexpectedly loaded"),
        Err(e) => println!("  ✗ {e}"),
    }
    println!();

    let db = PopulationDb::load()?;
    println!("✓ Bundled dataset loaded\n");

    // Example 2: Unknown and malformed codes are just misses
    println!("--- Example 2: Unknown or malformed codes ---");
    for code in ["XX", "ZZZ", "", "A", "ABCD", "123", " de"] {
        match db.get_population(code) {
            Some(population) => println!("  Found: {code:?} -> {population}"),
            None => println!("  Not found: {code:?}"),
        }
    }
    println!();

    // Example 3: Zero is a real value, not a miss
    println!("--- Example 3: Zero population ---");
    let mock = PopulationDb::from_maps(
        PopulationMap::from([("AA".to_string(), 0)]),
        PopulationMap::new(),
    );
    println!("  get_population(\"aa\") = {:?}", mock.get_population("aa"));

    Ok(())
}
