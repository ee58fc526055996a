// crates/countrydb-core/src/error.rs
use thiserror::Error;

/// Errors produced while building, loading or (attempting to) mutate a
/// [`CountryDb`](crate::CountryDb).
///
/// Unknown lookup tokens are never errors; every query returns `Option`.
#[derive(Debug, Error)]
pub enum CountryError {
    /// A mutating entry point was called on the read-only database.
    #[error("country database is read-only")]
    ReadOnly,

    /// Two different countries claim the same alias under [`AliasPolicy::Strict`].
    ///
    /// [`AliasPolicy::Strict`]: crate::AliasPolicy::Strict
    #[error("alias '{alias}' of {incoming} is already claimed by {existing}")]
    AliasCollision {
        alias: String,
        existing: String,
        incoming: String,
    },

    /// The same alpha-2 code appears on more than one row.
    #[error("duplicate primary key (alpha-2): {0}")]
    DuplicatePrimaryKey(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Bincode(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, CountryError>;
