// crates/countrydb-core/src/model/country.rs
use crate::common::CountryRow;
use crate::text::{equals_folded, fold_key};
use crate::traits::NameMatch;
use serde::{Deserialize, Serialize};

/// One country record.
///
/// Fields are private; a `Country` is built from a [`CountryRow`] and never
/// changes afterwards. Serializes to exactly the canonical row shape.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "CountryRow", into = "CountryRow")]
pub struct Country {
    name: String,
    alpha2: String,
    alpha3: String,
    numeric: String,
    continent: String,
    capital: String,
    timezone: String,
    phone: String,
    alternate_names: Vec<String>,
}

impl Country {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// ISO 3166-1 alpha-2 code; the primary key.
    pub fn alpha2(&self) -> &str {
        &self.alpha2
    }

    pub fn alpha3(&self) -> &str {
        &self.alpha3
    }

    /// Numeric code as written in the source (`"008"`, or `"Unknown"`).
    pub fn numeric(&self) -> &str {
        &self.numeric
    }

    pub fn continent(&self) -> &str {
        &self.continent
    }

    pub fn capital(&self) -> &str {
        &self.capital
    }

    /// IANA zone name, e.g. `Europe/London`.
    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    /// Calling code without the leading `+`.
    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn alternate_names(&self) -> &[String] {
        &self.alternate_names
    }

    /// Returns `true` if `candidate` equals one of the alternate names,
    /// ignoring ASCII case. No trimming and no partial matches.
    ///
    /// ```rust
    /// use countrydb_core::{Country, CountryRow};
    ///
    /// let row = CountryRow::partial("Anguilla", "AI", "AIA", "660");
    /// let ai = Country::from_canonical_form(row);
    /// assert!(ai.uses_name("ANGUILLA"));
    /// assert!(!ai.uses_name("Anguil"));
    /// assert!(!ai.uses_name(" Anguilla"));
    /// ```
    pub fn uses_name(&self, candidate: &str) -> bool {
        self.alternate_names
            .iter()
            .any(|n| equals_folded(n, candidate))
    }

    /// Flat key-value representation.
    pub fn to_canonical_form(&self) -> CountryRow {
        CountryRow {
            name: self.name.clone(),
            alpha2: self.alpha2.clone(),
            alpha3: self.alpha3.clone(),
            numeric: self.numeric.clone(),
            continent: self.continent.clone(),
            capital: self.capital.clone(),
            timezone: self.timezone.clone(),
            phone: self.phone.clone(),
            alternate_names: self.alternate_names.clone(),
        }
    }

    /// Inverse of [`Country::to_canonical_form`]; keeps alternate-name order.
    pub fn from_canonical_form(row: CountryRow) -> Self {
        Self {
            name: row.name,
            alpha2: row.alpha2,
            alpha3: row.alpha3,
            numeric: row.numeric,
            continent: row.continent,
            capital: row.capital,
            timezone: row.timezone,
            phone: row.phone,
            alternate_names: row.alternate_names,
        }
    }

    /// Every string the index registers for this country, in registration
    /// order: alternate names first, then alpha-2, alpha-3 and numeric.
    pub(crate) fn alias_candidates(&self) -> impl Iterator<Item = &str> {
        self.alternate_names
            .iter()
            .map(String::as_str)
            .chain([
                self.alpha2.as_str(),
                self.alpha3.as_str(),
                self.numeric.as_str(),
            ])
    }

    /// Accent-insensitive check against the name and every alternate name.
    pub(crate) fn any_name_contains(&self, folded_query: &str) -> bool {
        std::iter::once(&self.name)
            .chain(self.alternate_names.iter())
            .any(|n| fold_key(n).contains(folded_query))
    }
}

impl From<CountryRow> for Country {
    fn from(row: CountryRow) -> Self {
        Self::from_canonical_form(row)
    }
}

impl From<Country> for CountryRow {
    fn from(country: Country) -> Self {
        CountryRow {
            name: country.name,
            alpha2: country.alpha2,
            alpha3: country.alpha3,
            numeric: country.numeric,
            continent: country.continent,
            capital: country.capital,
            timezone: country.timezone,
            phone: country.phone,
            alternate_names: country.alternate_names,
        }
    }
}

impl NameMatch for Country {
    fn name_str(&self) -> &str {
        &self.name
    }
}
