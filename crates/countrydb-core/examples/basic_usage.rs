//! Basic usage example for countrydb-core
//!
//! This example demonstrates how to:
//! - Load the bundled country table
//! - Resolve names, alternate spellings and ISO codes
//! - Filter by continent and calling code
//! - Run an accent-insensitive search

use countrydb_core::prelude::*;

fn main() -> Result<()> {
    println!("=== countrydb Basic Usage Example ===\n");

    println!("Loading country table...");
    let db = CountryDb::load()?;
    println!("✓ Loaded {} countries\n", db.len());

    // Example 1: List the first few countries in declaration order
    println!("--- Example 1: List countries ---");
    for (i, country) in db.iter().take(5).enumerate() {
        println!("{}. {} ({})", i + 1, country.name(), country.alpha2());
    }
    println!("... and {} more\n", db.len() - 5);

    // Example 2: Every alias leads to the same record
    println!("--- Example 2: Resolve aliases ---");
    for token in ["United Kingdom", "great britain", "GB", "gbr", "826"] {
        match db.get(token) {
            Some(c) => println!("  {token:>16} -> {} ({})", c.name(), c.alpha2()),
            None => println!("  {token:>16} -> not found"),
        }
    }
    println!();

    // Example 3: Typed lookups and the full record
    println!("--- Example 3: Country details ---");
    if let Some(country) = db.get_by_alpha3("JPN") {
        println!("Name: {}", country.name());
        println!("Alpha-2: {}", country.alpha2());
        println!("Numeric: {}", country.numeric());
        println!("Capital: {}", country.capital());
        println!("Timezone: {}", country.timezone());
        println!("Calling code: +{}", country.phone());
        println!("Also known as: {}", country.alternate_names().join(", "));
    }
    println!();

    // Example 4: Calling codes
    println!("--- Example 4: Find countries by phone code ---");
    let phone_code = "+44";
    let with_code = db.find_by_phone_code(phone_code);
    println!("Countries with phone code {phone_code}: {}", with_code.len());
    for country in with_code {
        println!("- {}", country.name());
    }
    println!();

    // Example 5: Continents
    println!("--- Example 5: Filter by continent ---");
    let polar = db.find_by_continent("Antarctica");
    println!("Antarctic territories: {}", polar.len());
    for country in polar {
        println!("- {}", country.name());
    }
    println!();

    // Example 6: Search
    println!("--- Example 6: Search ---");
    for hit in db.search("cote").iter().take(5) {
        println!("  {:>3}  {}", hit.score, hit.country.name());
    }
    println!();

    // Example 7: Statistics
    println!("--- Example 7: Database statistics ---");
    let stats = db.stats();
    println!("Total countries: {}", stats.countries);
    println!("Distinct aliases: {}", stats.aliases);
    for c in db.collisions() {
        println!("Alias '{}' moved from {} to {}", c.alias, c.shadowed, c.winner);
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}
