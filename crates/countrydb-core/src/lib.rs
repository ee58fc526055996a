// crates/countrydb-core/src/lib.rs

//! # countrydb-core
//!
//! Resolve any way of naming a country (common name, official or native
//! name, alternate spelling, ISO alpha-2, alpha-3 or numeric code) to one
//! [`Country`] record.
//!
//! ```rust
//! use countrydb_core::prelude::*;
//!
//! let db = CountryDb::load()?;
//!
//! let uk = db.get("great britain").expect("bundled");
//! assert_eq!(uk.alpha2(), "GB");
//! assert_eq!(db.get("826"), Some(uk));
//! assert_eq!(db.get(" gbr "), Some(uk));
//!
//! assert!(db.get("not-real").is_none());
//! # Ok::<(), countrydb_core::CountryError>(())
//! ```
//!
//! The table is built once and is read-only afterwards; share it by
//! reference across threads.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod audit;
pub mod common;
pub mod error;
pub mod loader; // The public loader
pub mod model;
pub mod text;
pub mod traits;
pub mod prelude;

// Re-exports
pub use crate::common::{CountryRow, DbStats};
pub use crate::error::{CountryError, Result};
pub use crate::model::{
    AliasCollision, AliasPolicy, Country, CountryDb, CountryDbBuilder, SearchHit,
};
pub use crate::traits::{CountryLookup, NameMatch};

#[cfg(feature = "builder")]
pub use crate::loader::builder::{build_snapshot, CompressionMode};
