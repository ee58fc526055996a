use clap::{Parser, Subcommand};

/// CLI arguments for countrydb-cli
#[derive(Debug, Parser)]
#[command(
    name = "countrydb",
    version,
    about = "Resolve country names and ISO codes against the countrydb-core dataset"
)]
pub struct CliArgs {
    /// Dataset to load instead of the bundled one (JSON, JSON.gz or .bin snapshot)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Optional comma-separated list of ISO2 country codes to filter on (e.g. DE,CH,AT)
    #[arg(short = 'f', long = "filter", global = true)]
    pub filter: Option<String>,

    /// Reject datasets where two countries share an alias
    #[arg(long = "strict", global = true)]
    pub strict: bool,

    /// Log debug output to stderr (overrides RUST_LOG)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the database contents
    Stats,

    /// List all countries
    Countries,

    /// Resolve a name, alternate name, alpha-2, alpha-3 or numeric code
    Get {
        /// Any alias (e.g. "Great Britain", gb, GBR, 826)
        token: String,
    },

    /// List countries on a continent
    Find {
        /// Continent name (case-insensitive)
        #[arg(long)]
        continent: String,
    },

    /// List countries whose calling code starts with a prefix
    Phone {
        /// Prefix such as +1 or 44
        prefix: String,
    },

    /// Accent-insensitive search over names and codes
    Search {
        /// Partial name or code (e.g. "cote d")
        query: String,
    },

    /// Cross-check a row file from another source against the database
    Audit {
        /// JSON rows; unknown fields may be empty strings
        rows: String,
    },

    /// Show aliases that were taken over by a later country
    Collisions,

    /// Write a binary snapshot of a JSON dataset
    #[cfg(feature = "builder")]
    Build {
        /// Source JSON (or JSON.gz) rows
        source: String,
        /// Output snapshot path (*.bin)
        out: String,
        /// Write the snapshot without gzip
        #[arg(long)]
        no_compress: bool,
    },
}
