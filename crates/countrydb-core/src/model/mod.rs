// crates/countrydb-core/src/model/mod.rs
pub mod country;
pub mod db;
pub mod search;

pub use country::Country;
pub use db::{AliasCollision, AliasPolicy, CountryDb, CountryDbBuilder};
pub use search::SearchHit;

#[cfg(not(feature = "compact"))]
pub const CACHE_SUFFIX: &str = "bin";
#[cfg(feature = "compact")]
pub const CACHE_SUFFIX: &str = "comp.bin";
