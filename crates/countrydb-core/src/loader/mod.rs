// crates/countrydb-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and delegates to the
//! payload parsers (bincode snapshot vs JSON rows).
//!
//! - [`CountryDb::load`]: the compiled-in dataset, parsed once per process.
//! - [`CountryDb::load_from_path`]: a JSON, JSON.gz or `.bin` snapshot file.
//! - [`read_rows`]: raw rows for tooling that doesn't need an index.

use crate::common::{CountryRow, CountryRows};
use crate::error::Result;
use crate::model::CountryDb;
use bincode::Options;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;

pub mod common_io;

#[cfg(feature = "builder")]
pub mod builder;

/// Upper bound for snapshot payloads; the real dataset is ~100 KiB.
const SNAPSHOT_LIMIT: u64 = 16 * 1024 * 1024;

#[cfg(feature = "json")]
static EMBEDDED_JSON: &str = include_str!("../../data/countries.json");

#[cfg(feature = "json")]
static COUNTRY_DB_CACHE: once_cell::sync::OnceCell<CountryDb> = once_cell::sync::OnceCell::new();

pub(crate) fn snapshot_options() -> impl Options {
    bincode::DefaultOptions::new().with_limit(SNAPSHOT_LIMIT)
}

impl CountryDb {
    /// The compiled-in dataset.
    ///
    /// Parsed on first use and cached for the lifetime of the process, so
    /// every caller shares the same instance.
    ///
    /// ```rust
    /// use countrydb_core::{CountryDb, CountryLookup};
    ///
    /// let db = CountryDb::load().unwrap();
    /// assert_eq!(db.get("South Georgia").unwrap().alpha3(), "SGS");
    /// assert!(std::ptr::eq(db, CountryDb::load().unwrap()));
    /// ```
    #[cfg(feature = "json")]
    pub fn load() -> Result<&'static CountryDb> {
        COUNTRY_DB_CACHE.get_or_try_init(|| {
            let db = Self::from_json_str(EMBEDDED_JSON)?;
            info!(countries = db.len(), "loaded embedded country dataset");
            Ok(db)
        })
    }

    /// Directory holding the bundled dataset (`<crate>/data`).
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "countries.json"
    }

    /// Builds from a JSON array of rows.
    #[cfg(feature = "json")]
    pub fn from_json_str(json: &str) -> Result<Self> {
        let rows: CountryRows = serde_json::from_str(json)?;
        Self::new(rows)
    }

    /// Builds from raw JSON bytes; invalid UTF-8 is replaced rather than
    /// rejected.
    #[cfg(feature = "json")]
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        Self::from_json_str(&crate::text::decode_utf8(bytes))
    }

    /// Builds from the bytes of a snapshot file, as written by
    /// [`build_snapshot`](crate::build_snapshot) or
    /// [`CountryDb::save_as`](crate::CountryDb::save_as). Gzip-wrapped
    /// snapshots are unwrapped first (requires `compact`).
    pub fn from_snapshot_bytes(data: &[u8]) -> Result<Self> {
        let data = common_io::gunzip_if_compressed(data)?;
        let rows: CountryRows = snapshot_options().deserialize(&data[..])?;
        Self::new(rows)
    }

    /// **Standard Loader:** reads a dataset file, optionally keeping only the
    /// listed ISO2 codes.
    ///
    /// `*.bin` files are snapshots, anything else is JSON rows. Gzip content
    /// is detected and unwrapped automatically (requires `compact`).
    pub fn load_from_path(path: impl AsRef<Path>, filter: Option<&[&str]>) -> Result<Self> {
        let path = path.as_ref();
        let rows = read_rows(path)?;
        let db = Self::builder().filter(filter.unwrap_or_default()).build(rows)?;
        info!(path = %path.display(), countries = db.len(), "loaded country dataset");
        Ok(db)
    }
}

/// Reads rows from a dataset file without building an index.
pub fn read_rows(path: impl AsRef<Path>) -> Result<Vec<CountryRow>> {
    let path = path.as_ref();
    let data = common_io::read_all(path)?;
    if common_io::is_snapshot(path) {
        return Ok(snapshot_options().deserialize(&data)?);
    }
    rows_from_json(&data)
}

#[cfg(feature = "json")]
fn rows_from_json(data: &[u8]) -> Result<Vec<CountryRow>> {
    Ok(serde_json::from_str(&crate::text::decode_utf8(data))?)
}

#[cfg(not(feature = "json"))]
fn rows_from_json(_data: &[u8]) -> Result<Vec<CountryRow>> {
    Err(crate::error::CountryError::InvalidData(
        "JSON datasets require the 'json' feature".into(),
    ))
}

/// Reads rows from any reader holding a snapshot payload.
pub fn read_snapshot<R: Read>(reader: R) -> Result<Vec<CountryRow>> {
    Ok(snapshot_options().deserialize_from(reader)?)
}
