//! Error handling example for countrydb-core
//!
//! This example demonstrates proper error handling and edge cases

use countrydb_core::prelude::*;

fn main() -> Result<()> {
    println!("=== countrydb Error Handling Example ===\n");

    // Example 1: Handling load errors
    println!("--- Example 1: Loading a missing file ---");
    match CountryDb::load_from_path("does/not/exist.json", None) {
        Ok(db) => println!("  Unexpectedly loaded {} countries", db.len()),
        Err(e) => println!("  ✗ {e}"),
    }
    println!();

    let db = CountryDb::load()?;

    // Example 2: Unknown tokens are absent, not errors
    println!("--- Example 2: Unknown tokens ---");
    for token in ["XX", "", "Atlantis", "999"] {
        match db.get(token) {
            Some(country) => println!("  Found: {} ({})", country.name(), country.alpha2()),
            None => println!("  Not found: {token:?}"),
        }
    }
    println!();

    // Example 3: Bad rows
    println!("--- Example 3: Rejected datasets ---");
    let duplicate = vec![
        CountryRow::partial("Aland", "AX", "ALA", "248"),
        CountryRow::partial("Aland Islands", "ax", "ALX", "999"),
    ];
    match CountryDb::new(duplicate) {
        Ok(_) => println!("  Unexpectedly accepted duplicate alpha-2"),
        Err(e) => println!("  ✗ {e}"),
    }
    match CountryDb::builder().policy(AliasPolicy::Strict).build(db.to_rows()) {
        Ok(_) => println!("  Strict build accepted the bundled data"),
        Err(e) => println!("  ✗ strict: {e}"),
    }
    println!();

    // Example 4: The table is read-only
    println!("--- Example 4: Mutation is refused ---");
    let mut owned = CountryDb::new(db.to_rows())?;
    if let Err(e) = owned.try_remove("GB") {
        println!("  ✗ {e}");
    }
    if let Err(e) = owned.try_insert("ZZ", CountryRow::partial("Zed", "ZZ", "ZZZ", "000")) {
        println!("  ✗ {e}");
    }
    println!("  Still {} countries", owned.len());

    Ok(())
}
