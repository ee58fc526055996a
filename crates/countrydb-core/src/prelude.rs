//! countrydb prelude: bring common types and traits into scope.

pub use crate::audit::{audit, AuditIssue};
pub use crate::common::{CountryRow, DbStats};
pub use crate::error::{CountryError, Result};
pub use crate::model::{
    AliasCollision, AliasPolicy, Country, CountryDb, CountryDbBuilder, SearchHit,
};
pub use crate::traits::{CountryLookup, NameMatch};
