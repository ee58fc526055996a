#![cfg(feature = "json")]

use countrydb_core::loader::read_rows;
use countrydb_core::prelude::*;
use pretty_assertions::assert_eq;
use std::io::Write;

const SAMPLE: &str = r#"[
  {
    "name": "Hungary",
    "alpha2": "HU",
    "alpha3": "HUN",
    "numeric": "348",
    "continent": "Europe",
    "capital": "Budapest",
    "timezone": "Europe/Budapest",
    "phone": "36",
    "alternate_names": ["HU", "Hungary", "Magyarország"]
  },
  {
    "name": "New Zealand",
    "alpha2": "NZ",
    "alpha3": "NZL",
    "numeric": "554",
    "alternate_names": ["Aotearoa", "NZ", "New Zealand"]
  }
]"#;

fn write_file(dir: &tempfile::TempDir, name: &str, bytes: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::File::create(&path).unwrap().write_all(bytes).unwrap();
    path
}

#[test]
fn load_json_rows_with_missing_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "countries.json", SAMPLE.as_bytes());

    let db = CountryDb::load_from_path(&path, None).unwrap();
    assert_eq!(db.len(), 2);
    let nz = db.get("aotearoa").unwrap();
    // absent keys come back as empty strings, never missing
    assert_eq!(nz.capital(), "");
    assert_eq!(nz.to_canonical_form().phone, "");
}

#[test]
fn load_with_filter() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "countries.json", SAMPLE.as_bytes());

    let db = CountryDb::load_from_path(&path, Some(&["nz"][..])).unwrap();
    assert_eq!(db.len(), 1);
    assert!(db.exists("NZL"));
    assert!(!db.exists("Hungary"));
}

#[test]
fn invalid_utf8_is_replaced_not_rejected() {
    let mut bytes = SAMPLE.as_bytes().to_vec();
    let pos = SAMPLE.find("Aotearoa").unwrap() + 1;
    bytes[pos] = 0xff;
    let db = CountryDb::from_json_slice(&bytes).unwrap();
    assert!(db.exists("A\u{fffd}tearoa"));
    assert!(db.exists("Magyarország"));
}

#[test]
fn malformed_json_is_an_error() {
    assert!(matches!(
        CountryDb::from_json_str("[{\"alpha2\": 12}]"),
        Err(CountryError::Json(_))
    ));
}

#[test]
fn missing_file_is_not_found() {
    let err = CountryDb::load_from_path("/no/such/countries.json", None).unwrap_err();
    assert!(matches!(err, CountryError::NotFound(_)));
}

#[cfg(feature = "compact")]
#[test]
fn gzipped_json_is_detected_by_content() {
    use flate2::{write::GzEncoder, Compression};

    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    enc.write_all(SAMPLE.as_bytes()).unwrap();
    let gz = enc.finish().unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "countries.json.gz", &gz);
    let db = CountryDb::load_from_path(&path, None).unwrap();
    assert_eq!(db.get("348").unwrap().name(), "Hungary");
}

#[cfg(feature = "builder")]
mod snapshots {
    use super::*;
    use countrydb_core::{build_snapshot, CompressionMode};
    use pretty_assertions::assert_eq;

    #[test]
    fn snapshot_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_file(&dir, "countries.json", SAMPLE.as_bytes());

        for (mode, name) in [(CompressionMode::None, "plain.bin"), (CompressionMode::preferred(), "packed.bin")] {
            let out = dir.path().join(name);
            build_snapshot(&source, &out, mode).unwrap();
            assert_eq!(read_rows(&out).unwrap(), read_rows(&source).unwrap());

            let db = CountryDb::load_from_path(&out, None).unwrap();
            assert_eq!(db.get("Magyarország").unwrap().alpha2(), "HU");
        }
    }

    #[test]
    fn save_as_preserves_everything() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("full.bin");
        let db = CountryDb::load().unwrap();
        db.save_as(&out).unwrap();

        let reloaded = CountryDb::load_from_path(&out, None).unwrap();
        assert_eq!(reloaded.to_rows(), db.to_rows());
        assert_eq!(reloaded.collisions(), db.collisions());
    }

    #[test]
    fn load_via_cache_writes_and_reuses_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_file(&dir, "countries.json", SAMPLE.as_bytes());

        let first = CountryDb::load_via_cache(&source).unwrap();
        let cached: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|n| n.ends_with(".bin"))
            .collect();
        assert_eq!(cached.len(), 1);

        let second = CountryDb::load_via_cache(&source).unwrap();
        assert_eq!(first.to_rows(), second.to_rows());
    }

    #[test]
    fn build_snapshot_rejects_duplicate_primary_keys() {
        let dir = tempfile::tempdir().unwrap();
        let dup = r#"[{"name":"A","alpha2":"AA"},{"name":"B","alpha2":"aa"}]"#;
        let source = write_file(&dir, "dup.json", dup.as_bytes());
        let err = build_snapshot(&source, &dir.path().join("dup.bin"), CompressionMode::None).unwrap_err();
        assert!(matches!(err, CountryError::DuplicatePrimaryKey(_)));
    }

    #[test]
    fn snapshot_bytes_build_a_database() {
        let dir = tempfile::tempdir().unwrap();
        let db = CountryDb::load().unwrap();

        let packed = dir.path().join("packed.bin");
        db.save_as(&packed).unwrap();
        let from_packed = CountryDb::from_snapshot_bytes(&std::fs::read(&packed).unwrap()).unwrap();
        assert_eq!(from_packed.to_rows(), db.to_rows());

        let source = write_file(&dir, "countries.json", SAMPLE.as_bytes());
        let plain = dir.path().join("plain.bin");
        build_snapshot(&source, &plain, CompressionMode::None).unwrap();
        let from_plain = CountryDb::from_snapshot_bytes(&std::fs::read(&plain).unwrap()).unwrap();
        assert_eq!(from_plain.get("aotearoa").unwrap().alpha2(), "NZ");
    }

    #[test]
    fn truncated_snapshot_bytes_are_an_error() {
        assert!(matches!(
            CountryDb::from_snapshot_bytes(&[0x05]),
            Err(CountryError::Bincode(_))
        ));
    }
}
