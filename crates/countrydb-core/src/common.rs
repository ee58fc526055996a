// crates/countrydb-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the database.
///
/// Returned by [`CountryDb::stats`](crate::CountryDb::stats). `aliases` counts
/// distinct normalized keys in the index, after collisions were resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub countries: usize,
    pub aliases: usize,
}

/// Flat row shape shared by the embedded dataset, JSON sources, snapshots and
/// the canonical form of a [`Country`](crate::Country).
///
/// Partial sources (a feed that only knows names and codes) leave unknown
/// fields as empty strings; absent keys deserialize to `""` as well so the
/// shape stays stable.
///
/// ```json
/// {
///   "name": "Anguilla",
///   "alpha2": "AI",
///   "alpha3": "AIA",
///   "numeric": "660",
///   "continent": "North America",
///   "capital": "The Valley",
///   "timezone": "America/Anguilla",
///   "phone": "1264",
///   "alternate_names": ["AI", "Anguilla"]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRow {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub alpha2: String,
    #[serde(default)]
    pub alpha3: String,
    #[serde(default)]
    pub numeric: String,
    #[serde(default)]
    pub continent: String,
    #[serde(default)]
    pub capital: String,
    #[serde(default)]
    pub timezone: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub alternate_names: Vec<String>,
}

impl CountryRow {
    /// A row carrying only a name and the three codes, as produced by
    /// code-table feeds. The name doubles as the only alternate name.
    pub fn partial(name: &str, alpha2: &str, alpha3: &str, numeric: &str) -> Self {
        Self {
            name: name.to_owned(),
            alpha2: alpha2.to_owned(),
            alpha3: alpha3.to_owned(),
            numeric: numeric.to_owned(),
            alternate_names: vec![name.to_owned()],
            ..Self::default()
        }
    }
}

pub type CountryRows = Vec<CountryRow>;
