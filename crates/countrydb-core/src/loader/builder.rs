// crates/countrydb-core/src/loader/builder.rs
#![cfg(feature = "builder")]

use super::{common_io, read_rows, read_snapshot, snapshot_options};
use crate::error::Result;
use crate::model::{CountryDb, CACHE_SUFFIX};
use bincode::Options;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info, warn};

#[cfg(feature = "compact")]
use flate2::{write::GzEncoder, Compression};

// -----------------------------------------------------------------------------
// CONFIGURATION
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMode {
    Gzip,
    None,
}

impl CompressionMode {
    /// Gzip when the `compact` feature is enabled, plain otherwise.
    pub fn preferred() -> Self {
        if cfg!(feature = "compact") {
            CompressionMode::Gzip
        } else {
            CompressionMode::None
        }
    }
}

// -----------------------------------------------------------------------------
// SNAPSHOT BUILDER
// -----------------------------------------------------------------------------

/// Reads a JSON (or JSON.gz) row file and writes it as a bincode snapshot.
///
/// The rows are run through a full [`CountryDb`] build first, so a dataset
/// with a repeated alpha-2 code never makes it into a snapshot.
pub fn build_snapshot(source_path: &Path, out_path: &Path, compression: CompressionMode) -> Result<()> {
    info!(
        source = %source_path.display(),
        out = %out_path.display(),
        ?compression,
        "building country snapshot"
    );
    let db = CountryDb::new(read_rows(source_path)?)?;
    write_generic(out_path, &db.to_rows(), compression)
}

// -----------------------------------------------------------------------------
// RUNTIME HELPERS
// -----------------------------------------------------------------------------

impl CountryDb {
    /// Writes the current rows as a snapshot (gzip when `compact` is on).
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        write_generic(path.as_ref(), &self.to_rows(), CompressionMode::preferred())
    }

    /// **Smart Load:** uses `<source>.<suffix>` when it is at least as new as
    /// the JSON source, otherwise rebuilds from the source and refreshes the
    /// snapshot. Failing to write the snapshot is not an error.
    pub fn load_via_cache(source: impl AsRef<Path>) -> Result<Self> {
        let source = source.as_ref();
        let cache_path = common_io::get_cache_path(source, CACHE_SUFFIX);

        if is_cache_fresh(source, &cache_path) {
            match common_io::open_stream(&cache_path).and_then(read_snapshot) {
                Ok(rows) => {
                    debug!(cache = %cache_path.display(), "using country snapshot cache");
                    return Self::new(rows);
                }
                Err(e) => warn!(cache = %cache_path.display(), error = %e, "ignoring unreadable snapshot cache"),
            }
        }

        let db = Self::new(read_rows(source)?)?;
        if let Err(e) = db.save_as(&cache_path) {
            warn!(cache = %cache_path.display(), error = %e, "could not refresh snapshot cache");
        }
        Ok(db)
    }
}

fn is_cache_fresh(source: &Path, cache_path: &Path) -> bool {
    let cache_time = match fs::metadata(cache_path).and_then(|m| m.modified()) {
        Ok(t) => t,
        Err(_) => return false,
    };
    match fs::metadata(source).and_then(|m| m.modified()) {
        Ok(source_time) => source_time <= cache_time,
        // Source gone: the snapshot is all we have.
        Err(_) => true,
    }
}

// -----------------------------------------------------------------------------
// GENERIC WRITER
// -----------------------------------------------------------------------------

fn write_generic<T: Serialize>(path: &Path, payload: &T, compression: CompressionMode) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    match compression {
        CompressionMode::Gzip => {
            #[cfg(feature = "compact")]
            {
                let mut encoder = GzEncoder::new(writer, Compression::default());
                snapshot_options().serialize_into(&mut encoder, payload)?;
                // finish() writes the gzip trailer
                encoder.finish()?.flush()?;
            }
            #[cfg(not(feature = "compact"))]
            {
                return Err(crate::error::CountryError::InvalidData(
                    "Gzip requested but 'compact' disabled".into(),
                ));
            }
        }
        CompressionMode::None => {
            snapshot_options().serialize_into(&mut writer, payload)?;
            writer.flush()?;
        }
    }

    info!(path = %path.display(), ?compression, "wrote country snapshot");
    Ok(())
}
