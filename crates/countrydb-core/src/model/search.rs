// crates/countrydb-core/src/model/search.rs
use super::country::Country;
use super::db::CountryDb;
use crate::common::DbStats;
use crate::text::{equals_folded, fold_key, normalize_alias};
use crate::traits::CountryLookup;

/// Result item of [`CountryDb::search`] with relevance score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit<'a> {
    pub score: i32,
    pub country: &'a Country,
}

impl SearchHit<'_> {
    /// Returns true if this hit refers to the country with the given alpha-2.
    #[inline]
    pub fn is_alpha2(&self, code: &str) -> bool {
        self.country.alpha2().eq_ignore_ascii_case(code)
    }
}

impl CountryLookup for CountryDb {
    fn get(&self, token: &str) -> Option<&Country> {
        self.aliases
            .get(&normalize_alias(token))
            .map(|&pos| &self.countries[pos])
    }

    fn countries(&self) -> &[Country] {
        &self.countries
    }
}

impl CountryDb {
    pub fn stats(&self) -> DbStats {
        DbStats {
            countries: self.countries.len(),
            aliases: self.aliases.len(),
        }
    }

    /// Countries on the given continent (ASCII case-insensitive).
    pub fn find_by_continent(&self, continent: &str) -> Vec<&Country> {
        let continent = continent.trim();
        self.find_all_by(|c| equals_folded(c.continent(), continent))
    }

    /// Find countries whose calling code starts with `prefix` (e.g. "+1", "44").
    pub fn find_by_phone_code(&self, prefix: &str) -> Vec<&Country> {
        let prefix = prefix.trim().trim_start_matches('+');
        if prefix.is_empty() {
            return Vec::new();
        }
        // Linear scan is perfectly fine for ~250 countries
        self.find_all_by(|c| c.phone().starts_with(prefix))
    }

    /// Accent-insensitive search over codes, names and alternate names.
    ///
    /// Unlike [`CountryLookup::get`] this tolerates partial input and
    /// diacritics ("cote d" finds Côte d'Ivoire). Results are sorted by score;
    /// ties keep declaration order.
    ///
    /// | match                              | score |
    /// |------------------------------------|-------|
    /// | alpha-2 / alpha-3 / numeric        | 100   |
    /// | canonical name                     | 90    |
    /// | canonical name prefix              | 80    |
    /// | alternate name                     | 70    |
    /// | substring of any name              | 50    |
    pub fn search(&self, query: &str) -> Vec<SearchHit<'_>> {
        let q_raw = query.trim();
        if q_raw.is_empty() {
            return Vec::new();
        }
        let q = fold_key(q_raw);

        let mut out: Vec<SearchHit<'_>> = self
            .countries
            .iter()
            .filter_map(|c| score(c, q_raw, &q).map(|score| SearchHit { score, country: c }))
            .collect();

        // stable sort keeps declaration order among equal scores
        out.sort_by(|a, b| b.score.cmp(&a.score));
        out
    }
}

fn score(c: &Country, q_raw: &str, q: &str) -> Option<i32> {
    if [c.alpha2(), c.alpha3(), c.numeric()]
        .iter()
        .any(|code| code.eq_ignore_ascii_case(q_raw))
    {
        return Some(100);
    }

    let name = fold_key(c.name());
    if name == q {
        return Some(90);
    }
    if name.starts_with(q) {
        return Some(80);
    }
    if c.alternate_names().iter().any(|n| fold_key(n) == q) {
        return Some(70);
    }
    if c.any_name_contains(q) {
        return Some(50);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::CountryRow;
    use pretty_assertions::assert_eq;

    fn db() -> CountryDb {
        let rows = vec![
            CountryRow {
                name: "Ivory Coast".into(),
                alpha2: "CI".into(),
                alpha3: "CIV".into(),
                numeric: "384".into(),
                continent: "Africa".into(),
                phone: "225".into(),
                alternate_names: vec!["CI".into(), "Côte d'Ivoire".into(), "Ivory Coast".into()],
                ..CountryRow::default()
            },
            CountryRow {
                name: "Canada".into(),
                alpha2: "CA".into(),
                alpha3: "CAN".into(),
                numeric: "124".into(),
                continent: "North America".into(),
                phone: "1".into(),
                alternate_names: vec!["CA".into(), "Canada".into()],
                ..CountryRow::default()
            },
            CountryRow {
                name: "Anguilla".into(),
                alpha2: "AI".into(),
                alpha3: "AIA".into(),
                numeric: "660".into(),
                continent: "North America".into(),
                phone: "1264".into(),
                alternate_names: vec!["AI".into(), "Anguilla".into()],
                ..CountryRow::default()
            },
        ];
        CountryDb::new(rows).unwrap()
    }

    #[test]
    fn get_is_case_and_whitespace_insensitive() {
        let db = db();
        let ca = db.get("CA").unwrap();
        assert_eq!(db.get("ca"), Some(ca));
        assert_eq!(db.get("  CAN "), Some(ca));
        assert_eq!(db.get("\tCanada\n"), Some(ca));
        assert_eq!(db.get("Cana"), None);
        assert_eq!(db.get_by_numeric("124"), Some(ca));
        assert_eq!(db.get_by_name("canada"), Some(ca));
    }

    #[test]
    fn phone_prefix_ignores_plus() {
        let db = db();
        let codes: Vec<&str> = db
            .find_by_phone_code("+1")
            .into_iter()
            .map(Country::alpha2)
            .collect();
        assert_eq!(codes, vec!["CA", "AI"]);
        assert!(db.find_by_phone_code("+").is_empty());
    }

    #[test]
    fn continent_filter_keeps_order() {
        let db = db();
        let codes: Vec<&str> = db
            .find_by_continent("north america")
            .into_iter()
            .map(Country::alpha2)
            .collect();
        assert_eq!(codes, vec!["CA", "AI"]);
    }

    #[test]
    fn search_ranks_and_folds_accents() {
        let db = db();
        let hits = db.search("cote d");
        assert_eq!(hits.len(), 1);
        assert!(hits[0].is_alpha2("CI"));
        assert_eq!(hits[0].score, 50);

        let hits = db.search("can");
        assert_eq!(hits[0].score, 100);
        assert!(hits[0].is_alpha2("CA"));

        let hits = db.search("cote d'ivoire");
        assert_eq!(hits[0].score, 70);

        assert!(db.search("   ").is_empty());
    }

    #[test]
    fn predicates_may_carry_state() {
        let db = db();
        let mut seen = 0;
        let second = db.find_by(|_| {
            seen += 1;
            seen == 2
        });
        assert_eq!(second.unwrap().alpha2(), "CA");
        assert_eq!(seen, 2);

        let mut budget = 2;
        let first_two = db.find_all_by(|_| {
            budget -= 1;
            budget >= 0
        });
        assert_eq!(first_two.len(), 2);
    }

    #[test]
    fn stats_count_distinct_aliases() {
        let stats = db().stats();
        assert_eq!(stats.countries, 3);
        // CI, CIV, 384, côte d'ivoire, ivory coast, CA, CAN, 124, canada, AI, AIA, 660, anguilla
        assert_eq!(stats.aliases, 13);
    }
}
