// crates/countrydb-core/src/audit.rs

//! # Source Audit
//!
//! Cross-checks rows from a third-party code table (often partial: just a
//! name and the three codes) against a [`CountryDb`]. Empty fields in a row
//! mean "this source doesn't know" and are skipped.

use crate::common::CountryRow;
use crate::model::{Country, CountryDb};
use crate::traits::CountryLookup;
use std::fmt;

/// A column of a [`CountryRow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Alpha2,
    Alpha3,
    Numeric,
    Continent,
    Capital,
    Timezone,
    Phone,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Field::Name => "name",
            Field::Alpha2 => "alpha2",
            Field::Alpha3 => "alpha3",
            Field::Numeric => "numeric",
            Field::Continent => "continent",
            Field::Capital => "capital",
            Field::Timezone => "timezone",
            Field::Phone => "phone",
        };
        f.write_str(s)
    }
}

/// One disagreement between a source row and the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditIssue {
    /// The token does not resolve at all.
    Unresolved { field: Field, token: String },
    /// The token resolves, but to a different country than the row's alpha-2.
    WrongCountry {
        field: Field,
        token: String,
        expected: String,
        found: String,
    },
    /// The country resolves but an attribute differs.
    Mismatch {
        alpha2: String,
        field: Field,
        expected: String,
        found: String,
    },
    /// The resolved country does not list the row's name.
    NameNotUsed { alpha2: String, name: String },
}

impl fmt::Display for AuditIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditIssue::Unresolved { field, token } => {
                write!(f, "{field} '{token}' does not resolve")
            }
            AuditIssue::WrongCountry {
                field,
                token,
                expected,
                found,
            } => write!(f, "{field} '{token}' resolves to {found}, expected {expected}"),
            AuditIssue::Mismatch {
                alpha2,
                field,
                expected,
                found,
            } => write!(f, "{alpha2}: {field} is '{found}', source says '{expected}'"),
            AuditIssue::NameNotUsed { alpha2, name } => {
                write!(f, "{alpha2}: '{name}' is not one of its names")
            }
        }
    }
}

/// Left-pads a purely numeric code to three digits (`"8"` -> `"008"`).
/// Anything else is returned trimmed but unchanged.
///
/// ```rust
/// use countrydb_core::audit::normalize_numeric;
///
/// assert_eq!(normalize_numeric("8"), "008");
/// assert_eq!(normalize_numeric("826"), "826");
/// assert_eq!(normalize_numeric("Unknown"), "Unknown");
/// ```
pub fn normalize_numeric(code: &str) -> String {
    let code = code.trim();
    if !code.is_empty() && code.len() < 3 && code.bytes().all(|b| b.is_ascii_digit()) {
        format!("{code:0>3}")
    } else {
        code.to_owned()
    }
}

/// Checks every row against `db` and returns all disagreements, in row order.
pub fn audit(db: &CountryDb, rows: &[CountryRow]) -> Vec<AuditIssue> {
    rows.iter().flat_map(|row| audit_row(db, row)).collect()
}

/// Checks a single row. See [`audit`].
pub fn audit_row(db: &CountryDb, row: &CountryRow) -> Vec<AuditIssue> {
    let mut issues = Vec::new();
    let alpha2 = row.alpha2.trim();

    let country = match db.by_primary_key(alpha2) {
        Some(c) => c,
        None => {
            issues.push(AuditIssue::Unresolved {
                field: Field::Alpha2,
                token: row.alpha2.clone(),
            });
            return issues;
        }
    };

    let numeric = normalize_numeric(&row.numeric);
    let tokens = [
        (Field::Name, row.name.as_str()),
        (Field::Alpha3, row.alpha3.as_str()),
        (Field::Numeric, numeric.as_str()),
    ];
    for (field, token) in tokens {
        if token.trim().is_empty() {
            continue;
        }
        match db.get(token) {
            None => issues.push(AuditIssue::Unresolved {
                field,
                token: token.to_owned(),
            }),
            Some(found) if found.alpha2() != country.alpha2() => {
                issues.push(AuditIssue::WrongCountry {
                    field,
                    token: token.to_owned(),
                    expected: country.alpha2().to_owned(),
                    found: found.alpha2().to_owned(),
                })
            }
            Some(_) => {}
        }
    }

    if !row.name.trim().is_empty() && !country.uses_name(row.name.trim()) {
        issues.push(AuditIssue::NameNotUsed {
            alpha2: country.alpha2().to_owned(),
            name: row.name.clone(),
        });
    }

    let attributes: [(Field, &str, fn(&Country) -> &str); 6] = [
        (Field::Alpha3, row.alpha3.as_str(), Country::alpha3),
        (Field::Numeric, numeric.as_str(), Country::numeric),
        (Field::Continent, row.continent.as_str(), Country::continent),
        (Field::Capital, row.capital.as_str(), Country::capital),
        (Field::Timezone, row.timezone.as_str(), Country::timezone),
        (Field::Phone, row.phone.as_str(), Country::phone),
    ];
    for (field, expected, get) in attributes {
        let expected = expected.trim();
        if expected.is_empty() || get(country) == expected {
            continue;
        }
        issues.push(AuditIssue::Mismatch {
            alpha2: country.alpha2().to_owned(),
            field,
            expected: expected.to_owned(),
            found: get(country).to_owned(),
        });
    }

    issues
}
