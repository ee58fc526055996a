// crates/countrydb-core/src/traits.rs
use crate::model::Country;
use crate::text::fold_key;

/// Name-based matching helpers for types that expose a canonical display name.
///
/// This trait centralizes accent-insensitive and case-insensitive comparisons
/// based on [`fold_key`]. Implementors provide a `&str` view of their canonical
/// name via [`NameMatch::name_str`], and get convenient helpers:
/// - [`NameMatch::is_named`]: equality on folded form
/// - [`NameMatch::name_contains`]: substring match on folded form
///
/// This is deliberately looser than the alias index, which only folds ASCII
/// case.
///
/// # Examples
/// ```rust
/// use countrydb_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Curaçao").is_named("curacao"));
/// assert!(Place("Réunion").name_contains("reun"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// Accent-insensitive and case-insensitive name comparison.
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        fold_key(self.name_str()) == fold_key(q)
    }

    /// Accent-insensitive + case-insensitive substring match.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        fold_key(self.name_str()).contains(&fold_key(q))
    }
}

/// The lookup surface of a country table.
///
/// Implementors supply the alias resolution ([`CountryLookup::get`]) and the
/// ordered record slice; the typed getters and scans are provided on top.
/// All methods are read-only, and an unknown token is `None`, never an error.
pub trait CountryLookup {
    /// Resolves any alias (name, alternate name, alpha-2, alpha-3, numeric).
    ///
    /// Case-insensitive for ASCII, surrounding whitespace is ignored.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use countrydb_core::{CountryDb, CountryLookup};
    ///
    /// let db = CountryDb::load().unwrap();
    /// let uk = db.get("great britain").unwrap();
    /// assert_eq!(uk.alpha2(), "GB");
    /// assert_eq!(db.get("gbr"), Some(uk));
    /// ```
    fn get(&self, token: &str) -> Option<&Country>;

    /// All countries in declaration order.
    fn countries(&self) -> &[Country];

    #[inline]
    fn get_by_name(&self, name: &str) -> Option<&Country> {
        self.get(name)
    }

    #[inline]
    fn get_by_alpha2(&self, code: &str) -> Option<&Country> {
        self.get(code)
    }

    #[inline]
    fn get_by_alpha3(&self, code: &str) -> Option<&Country> {
        self.get(code)
    }

    #[inline]
    fn get_by_numeric(&self, code: &str) -> Option<&Country> {
        self.get(code)
    }

    /// `true` if `token` resolves to a country.
    #[inline]
    fn exists(&self, token: &str) -> bool {
        self.get(token).is_some()
    }

    /// First country, in declaration order, for which `predicate` holds.
    ///
    /// Use this for queries the alias index cannot answer, e.g. an exact
    /// case-sensitive comparison or a match on an attribute.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use countrydb_core::{CountryDb, CountryLookup};
    ///
    /// let db = CountryDb::load().unwrap();
    /// let polar = db.find_by(|c| c.continent() == "Antarctica");
    /// assert!(polar.is_some());
    /// ```
    fn find_by<F>(&self, mut predicate: F) -> Option<&Country>
    where
        F: FnMut(&Country) -> bool,
    {
        self.countries().iter().find(|c| predicate(c))
    }

    /// Every country for which `predicate` holds, in declaration order.
    fn find_all_by<F>(&self, mut predicate: F) -> Vec<&Country>
    where
        F: FnMut(&Country) -> bool,
    {
        self.countries().iter().filter(|c| predicate(c)).collect()
    }
}
