// crates/countrydb-core/src/text.rs

//! # Text Folding
//!
//! Two folding rules live here and they must not be mixed up:
//!
//! - [`normalize_alias`] is the *index* rule. It is applied when the alias
//!   index is built and on every lookup. It trims and lowercases ASCII only,
//!   so non-Latin scripts pass through unchanged and never collapse onto each
//!   other.
//! - [`fold_key`] is the *search* rule. It transliterates to ASCII with
//!   `deunicode` and is only used by the fuzzy [`search`](crate::CountryDb::search)
//!   helpers, never by the index.

/// Normalizes an alias for the lookup index: trims surrounding whitespace and
/// lowercases ASCII letters. Other characters are left untouched.
///
/// ```rust
/// use countrydb_core::text::normalize_alias;
///
/// assert_eq!(normalize_alias("  Great Britain "), "great britain");
/// assert_eq!(normalize_alias("Magyarország"), "magyarország");
/// assert_eq!(normalize_alias("中華民國"), "中華民國");
/// ```
#[inline]
pub fn normalize_alias(s: &str) -> String {
    s.trim().to_ascii_lowercase()
}

/// ASCII case-insensitive equality without trimming.
#[inline]
pub fn equals_folded(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// Convert a string into a folded key suitable for fuzzy comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Côte d'Ivoire` -> `Cote d'Ivoire`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use countrydb_core::text::fold_key;
///
/// assert_eq!(fold_key("Côte d'Ivoire"), "cote d'ivoire");
/// assert_eq!(fold_key("Türkiye"), "turkiye");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Decodes raw bytes from an external source into text.
///
/// Invalid UTF-8 sequences (mixed-encoding artifacts from scraped feeds) are
/// replaced with U+FFFD; already-valid input is returned as-is.
pub fn decode_utf8(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
