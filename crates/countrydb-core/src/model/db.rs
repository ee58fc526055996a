// crates/countrydb-core/src/model/db.rs
use super::country::Country;
use crate::common::CountryRow;
use crate::error::{CountryError, Result};
use crate::text::normalize_alias;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// What to do when two countries register the same normalized alias.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AliasPolicy {
    /// The later row silently takes the alias over. This is what the bundled
    /// dataset needs ("Saint-Martin" is claimed by both SX and MF).
    #[default]
    LastWriteWins,
    /// Any collision aborts the build with [`CountryError::AliasCollision`].
    Strict,
}

/// An alias that was taken over by a later country during a
/// [`AliasPolicy::LastWriteWins`] build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasCollision {
    /// The normalized alias.
    pub alias: String,
    /// Alpha-2 of the country that lost the alias.
    pub shadowed: String,
    /// Alpha-2 of the country the alias now resolves to.
    pub winner: String,
}

/// The multi-key country table.
///
/// Built once from rows in declaration order; afterwards every method takes
/// `&self` and nothing can change the records or the index. The type is
/// `Send + Sync`, so it can be shared freely between threads.
///
/// Queries live on the [`CountryLookup`](crate::CountryLookup) trait.
#[derive(Clone, Debug)]
pub struct CountryDb {
    /// Records in declaration order.
    pub(crate) countries: Vec<Country>,
    /// Primary key (alpha-2, as written) -> position in `countries`.
    pub(crate) primary: HashMap<String, usize>,
    /// Normalized alias -> position in `countries`.
    pub(crate) aliases: HashMap<String, usize>,
    pub(crate) collisions: Vec<AliasCollision>,
}

impl CountryDb {
    /// Builds the table from explicit rows with the default
    /// [`AliasPolicy::LastWriteWins`].
    ///
    /// Fails only on an empty or repeated alpha-2 code.
    pub fn new(rows: impl IntoIterator<Item = CountryRow>) -> Result<Self> {
        CountryDbBuilder::new().build(rows)
    }

    /// Starts a configurable build.
    pub fn builder() -> CountryDbBuilder {
        CountryDbBuilder::new()
    }

    /// Aliases shadowed by a later country while building.
    ///
    /// Always empty for a [`AliasPolicy::Strict`] build.
    pub fn collisions(&self) -> &[AliasCollision] {
        &self.collisions
    }

    /// Number of countries.
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Countries in declaration order. Restartable: every call starts over.
    pub fn iter(&self) -> std::slice::Iter<'_, Country> {
        self.countries.iter()
    }

    /// Direct primary-key access (exact alpha-2, ASCII case-insensitive),
    /// bypassing the alias index.
    pub fn by_primary_key(&self, alpha2: &str) -> Option<&Country> {
        self.primary
            .get(&alpha2.trim().to_ascii_uppercase())
            .map(|&pos| &self.countries[pos])
    }

    /// All rows in canonical form, in declaration order.
    pub fn to_rows(&self) -> Vec<CountryRow> {
        self.countries.iter().map(Country::to_canonical_form).collect()
    }

    /// Always fails: the table is read-only.
    ///
    /// ```rust
    /// use countrydb_core::{CountryDb, CountryError, CountryRow};
    ///
    /// let mut db = CountryDb::new(vec![CountryRow::partial("Anguilla", "AI", "AIA", "660")]).unwrap();
    /// let err = db.try_insert("ZZ", CountryRow::default()).unwrap_err();
    /// assert!(matches!(err, CountryError::ReadOnly));
    /// assert_eq!(db.len(), 1);
    /// ```
    pub fn try_insert(&mut self, key: &str, _row: CountryRow) -> Result<()> {
        debug!(key, "rejected insert on read-only country table");
        Err(CountryError::ReadOnly)
    }

    /// Always fails: the table is read-only.
    pub fn try_remove(&mut self, key: &str) -> Result<Country> {
        debug!(key, "rejected remove on read-only country table");
        Err(CountryError::ReadOnly)
    }
}

impl<'a> IntoIterator for &'a CountryDb {
    type Item = &'a Country;
    type IntoIter = std::slice::Iter<'a, Country>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Configures how a [`CountryDb`] is assembled from rows.
#[derive(Debug, Clone, Default)]
pub struct CountryDbBuilder {
    policy: AliasPolicy,
    filter: Option<Vec<String>>,
}

impl CountryDbBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn policy(mut self, policy: AliasPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Keep only rows whose alpha-2 is listed (ASCII case-insensitive).
    /// An empty list disables filtering.
    pub fn filter(mut self, iso2: &[&str]) -> Self {
        self.filter = if iso2.is_empty() {
            None
        } else {
            Some(iso2.iter().map(|s| s.trim().to_ascii_uppercase()).collect())
        };
        self
    }

    /// Builds the records and the alias index in one pass over `rows`.
    pub fn build(self, rows: impl IntoIterator<Item = CountryRow>) -> Result<CountryDb> {
        let mut db = CountryDb {
            countries: Vec::new(),
            primary: HashMap::new(),
            aliases: HashMap::new(),
            collisions: Vec::new(),
        };

        for row in rows {
            if let Some(keep) = &self.filter {
                if !keep.contains(&row.alpha2.trim().to_ascii_uppercase()) {
                    continue;
                }
            }

            let country = Country::from_canonical_form(row);
            if country.alpha2().trim().is_empty() {
                return Err(CountryError::InvalidData(format!(
                    "country '{}' has no alpha-2 code",
                    country.name()
                )));
            }

            let pk = country.alpha2().trim().to_ascii_uppercase();
            if db.primary.contains_key(&pk) {
                return Err(CountryError::DuplicatePrimaryKey(country.alpha2().to_owned()));
            }

            let pos = db.countries.len();
            for alias in country.alias_candidates() {
                let key = normalize_alias(alias);
                if key.is_empty() {
                    continue;
                }
                match db.aliases.insert(key, pos) {
                    Some(prev) if prev != pos => {
                        let shadowed = db.countries[prev].alpha2().to_owned();
                        let alias = normalize_alias(alias);
                        if self.policy == AliasPolicy::Strict {
                            return Err(CountryError::AliasCollision {
                                alias,
                                existing: shadowed,
                                incoming: country.alpha2().to_owned(),
                            });
                        }
                        debug!(
                            alias = %alias,
                            shadowed = %shadowed,
                            winner = %country.alpha2(),
                            "alias taken over by later country"
                        );
                        db.collisions.push(AliasCollision {
                            alias,
                            shadowed,
                            winner: country.alpha2().to_owned(),
                        });
                    }
                    _ => {}
                }
            }

            db.primary.insert(pk, pos);
            db.countries.push(country);
        }

        debug!(
            countries = db.countries.len(),
            aliases = db.aliases.len(),
            collisions = db.collisions.len(),
            "country index built"
        );
        Ok(db)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::CountryLookup;
    use pretty_assertions::assert_eq;

    fn row(name: &str, a2: &str, a3: &str, num: &str, alts: &[&str]) -> CountryRow {
        CountryRow {
            name: name.into(),
            alpha2: a2.into(),
            alpha3: a3.into(),
            numeric: num.into(),
            alternate_names: alts.iter().map(|s| s.to_string()).collect(),
            ..CountryRow::default()
        }
    }

    fn fixture() -> Vec<CountryRow> {
        vec![
            row("Sint Maarten", "SX", "SXM", "534", &["SX", "Saint-Martin", "Sint Maarten"]),
            row("Saint Martin", "MF", "MAF", "663", &["MF", "Saint Martin", "Saint-Martin"]),
            row("Anguilla", "AI", "AIA", "660", &["AI", "Anguilla"]),
        ]
    }

    #[test]
    fn last_write_wins_on_collision() {
        let db = CountryDb::new(fixture()).unwrap();
        assert_eq!(db.get("saint-martin").unwrap().alpha2(), "MF");
        assert_eq!(db.get("Sint Maarten").unwrap().alpha2(), "SX");
        assert_eq!(
            db.collisions(),
            &[AliasCollision {
                alias: "saint-martin".into(),
                shadowed: "SX".into(),
                winner: "MF".into(),
            }]
        );
    }

    #[test]
    fn strict_policy_rejects_collision() {
        let err = CountryDb::builder()
            .policy(AliasPolicy::Strict)
            .build(fixture())
            .unwrap_err();
        match err {
            CountryError::AliasCollision {
                alias,
                existing,
                incoming,
            } => {
                assert_eq!(alias, "saint-martin");
                assert_eq!(existing, "SX");
                assert_eq!(incoming, "MF");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn duplicate_alias_within_one_country_is_not_a_collision() {
        let db = CountryDb::builder()
            .policy(AliasPolicy::Strict)
            .build(vec![row("Anguilla", "AI", "AIA", "660", &["AI", "Anguilla", "ANGUILLA"])])
            .unwrap();
        assert!(db.collisions().is_empty());
        assert!(db.exists("anguilla"));
    }

    #[test]
    fn duplicate_primary_key_is_rejected() {
        let mut rows = fixture();
        rows.push(row("Anguilla again", "ai", "XXX", "999", &[]));
        assert!(matches!(
            CountryDb::new(rows),
            Err(CountryError::DuplicatePrimaryKey(code)) if code == "ai"
        ));
    }

    #[test]
    fn empty_alpha2_is_invalid() {
        let rows = vec![row("Nowhere", " ", "NWH", "000", &["Nowhere"])];
        assert!(matches!(CountryDb::new(rows), Err(CountryError::InvalidData(_))));
    }

    #[test]
    fn filter_keeps_listed_countries_only() {
        let db = CountryDb::builder()
            .filter(&["ai", "SX"])
            .build(fixture())
            .unwrap();
        assert_eq!(db.len(), 2);
        assert!(db.get("MF").is_none());
        // MF was filtered out, so SX keeps its alias.
        assert_eq!(db.get("saint-martin").unwrap().alpha2(), "SX");
    }

    #[test]
    fn mutation_is_rejected_and_data_unchanged() {
        let mut db = CountryDb::new(fixture()).unwrap();
        let before = db.to_rows();
        assert!(matches!(
            db.try_insert("ZZ", row("Z", "ZZ", "ZZZ", "999", &[])),
            Err(CountryError::ReadOnly)
        ));
        assert!(matches!(db.try_remove("AI"), Err(CountryError::ReadOnly)));
        assert_eq!(db.to_rows(), before);
        assert!(db.exists("AI"));
        assert!(!db.exists("ZZ"));
    }

    #[test]
    fn iteration_is_ordered_and_restartable() {
        let db = CountryDb::new(fixture()).unwrap();
        let first: Vec<&str> = db.iter().map(Country::alpha2).collect();
        let second: Vec<&str> = (&db).into_iter().map(Country::alpha2).collect();
        assert_eq!(first, vec!["SX", "MF", "AI"]);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_codes_are_not_indexed() {
        let db = CountryDb::new(vec![CountryRow::partial("Atlantis", "AT", "", "")]).unwrap();
        assert!(db.get("").is_none());
        assert!(db.get("   ").is_none());
        assert!(!db.exists(""));
        assert_eq!(db.get("AT").unwrap().name(), "Atlantis");
        // "atlantis" and "at" only
        assert_eq!(db.aliases.len(), 2);
    }

    #[test]
    fn primary_key_lookup_ignores_aliases() {
        let db = CountryDb::new(fixture()).unwrap();
        assert_eq!(db.by_primary_key("ai").unwrap().name(), "Anguilla");
        assert!(db.by_primary_key("Anguilla").is_none());
    }
}
