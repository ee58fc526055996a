// crates/countrydb-core/src/loader/common_io.rs
use crate::error::{CountryError, Result};
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Opens a file, buffers it, and unwraps gzip if the content starts with the
/// gzip magic bytes. Returns a generic reader so callers don't care about
/// compression.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        CountryError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let mut reader = BufReader::new(file);
    let gzipped = reader.fill_buf()?.starts_with(&GZIP_MAGIC);

    if !gzipped {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        use flate2::read::GzDecoder;
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(CountryError::InvalidData(format!(
            "{} is gzip-compressed but the 'compact' feature is disabled",
            path.display()
        )))
    }
}

/// In-memory counterpart of [`open_stream`]: returns `data` as-is unless it
/// starts with the gzip magic bytes.
pub fn gunzip_if_compressed(data: &[u8]) -> Result<Cow<'_, [u8]>> {
    if !data.starts_with(&GZIP_MAGIC) {
        return Ok(Cow::Borrowed(data));
    }

    #[cfg(feature = "compact")]
    {
        use flate2::read::GzDecoder;
        let mut out = Vec::new();
        GzDecoder::new(data).read_to_end(&mut out)?;
        Ok(Cow::Owned(out))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(CountryError::InvalidData(
            "payload is gzip-compressed but the 'compact' feature is disabled".into(),
        ))
    }
}

/// Reads the whole (decompressed) stream into memory.
pub fn read_all(path: &Path) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    open_stream(path)?.read_to_end(&mut data)?;
    Ok(data)
}

/// `countries.json` -> `countries.json.<suffix>`
pub fn get_cache_path(source: &Path, suffix: &str) -> PathBuf {
    let filename = source
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();
    source.with_file_name(format!("{filename}.{suffix}"))
}

/// Binary snapshots are recognized by name: `*.bin`.
pub fn is_snapshot(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "bin")
}
