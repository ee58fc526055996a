//! countrydb: command-line interface for countrydb-core
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ countrydb stats
//!
//! - Resolve any alias (case-insensitive)
//!   $ countrydb get "great britain"
//!   $ countrydb get gbr
//!   $ countrydb get 826
//!
//! - List countries by continent or calling code
//!   $ countrydb find --continent antarctica
//!   $ countrydb phone +1
//!
//! - Fuzzy search
//!   $ countrydb search "cote d"
//!
//! - Check another source's code table against the dataset
//!   $ countrydb audit iban.json
//!
//! Data source
//! -----------
//!
//! By default the dataset compiled into `countrydb-core` is used. Pass
//! `--input <path>` for a JSON, JSON.gz or `.bin` snapshot file and
//! `--filter <ISO2,ISO2,...>` to keep only some countries.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use countrydb_core::prelude::*;
use countrydb_core::loader::read_rows;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("countrydb=debug,countrydb_core=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("countrydb=warn,countrydb_core=warn"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn open_db(args: &CliArgs) -> anyhow::Result<CountryDb> {
    let filter: Vec<&str> = args
        .filter
        .as_deref()
        .map(|s| {
            s.split(',')
                .map(|x| x.trim())
                .filter(|x| !x.is_empty())
                .collect()
        })
        .unwrap_or_default();

    let policy = if args.strict {
        AliasPolicy::Strict
    } else {
        AliasPolicy::LastWriteWins
    };

    let rows = match &args.input {
        Some(path) => read_rows(path).with_context(|| format!("reading dataset {path}"))?,
        None => CountryDb::load()?.to_rows(),
    };
    debug!(rows = rows.len(), ?policy, "building country table");

    Ok(CountryDb::builder().policy(policy).filter(&filter).build(rows)?)
}

fn print_country(c: &Country) {
    println!("Country: {}", c.name());
    println!("Alpha-2: {}", c.alpha2());
    println!("Alpha-3: {}", c.alpha3());
    println!("Numeric: {}", c.numeric());
    println!("Continent: {}", c.continent());
    println!("Capital: {}", c.capital());
    println!("Timezone: {}", c.timezone());
    println!("Phone: +{}", c.phone());
    println!("Also known as: {}", c.alternate_names().join(", "));
}

fn print_list(countries: &[&Country]) {
    for c in countries {
        println!("{} ({})", c.name(), c.alpha2());
    }
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    match &args.command {
        #[cfg(feature = "builder")]
        Commands::Build {
            source,
            out,
            no_compress,
        } => {
            use countrydb_core::{build_snapshot, CompressionMode};
            use std::path::Path;
            let mode = if *no_compress {
                CompressionMode::None
            } else {
                CompressionMode::preferred()
            };
            build_snapshot(Path::new(source), Path::new(out), mode)?;
            println!("Wrote {out}");
        }
        command => run_query(&open_db(&args)?, command)?,
    }

    Ok(())
}

fn run_query(db: &CountryDb, command: &Commands) -> anyhow::Result<()> {
    match command {
        Commands::Stats => {
            let stats = db.stats();
            println!("Database statistics:");
            println!("  Countries: {}", stats.countries);
            println!("  Aliases: {}", stats.aliases);
            println!("  Shadowed aliases: {}", db.collisions().len());
        }

        Commands::Countries => {
            for c in db {
                println!("{} ({})", c.name(), c.alpha2());
            }
        }

        Commands::Get { token } => match db.get(token) {
            Some(c) => print_country(c),
            None => eprintln!("No country found for: {token}"),
        },

        Commands::Find { continent } => {
            let found = db.find_by_continent(continent);
            if found.is_empty() {
                eprintln!("No countries on continent: {continent}");
            }
            print_list(&found);
        }

        Commands::Phone { prefix } => {
            let found = db.find_by_phone_code(prefix);
            if found.is_empty() {
                eprintln!("No countries with calling code: {prefix}");
            }
            print_list(&found);
        }

        Commands::Search { query } => {
            let hits = db.search(query);
            if hits.is_empty() {
                eprintln!("No countries matching: {query}");
            }
            for hit in hits {
                println!("{:>3}  {} ({})", hit.score, hit.country.name(), hit.country.alpha2());
            }
        }

        Commands::Audit { rows } => {
            let source = read_rows(rows).with_context(|| format!("reading {rows}"))?;
            let issues = audit(db, &source);
            for issue in &issues {
                println!("{issue}");
            }
            println!("{} rows checked, {} issues", source.len(), issues.len());
        }

        Commands::Collisions => {
            for c in db.collisions() {
                println!("'{}': {} -> {}", c.alias, c.shadowed, c.winner);
            }
        }

        #[cfg(feature = "builder")]
        Commands::Build { .. } => {}
    }

    Ok(())
}
