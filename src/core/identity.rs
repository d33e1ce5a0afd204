//! Record identifiers
//!
//! Seeded records carry short numeric ids ("1", "2", ...). Records created
//! from the command line get a fresh ULID, so ids stay unique without
//! consulting the existing collection.

use thiserror::Error;
use ulid::Ulid;

use crate::core::entity::Record;

/// Generate an identifier for a new record
pub fn new_record_id() -> String {
    Ulid::new().to_string()
}

/// Errors from resolving a user-supplied id query
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdLookupError {
    #[error("no {collection} record matches '{query}'")]
    NotFound { collection: String, query: String },

    #[error("'{query}' is ambiguous: matches {}", candidates.join(", "))]
    Ambiguous {
        query: String,
        candidates: Vec<String>,
    },
}

/// Resolve `query` against a collection.
///
/// An exact id match wins; otherwise the query must be an unambiguous
/// case-insensitive prefix of exactly one id.
pub fn resolve<'a, R: Record>(records: &'a [R], query: &str) -> Result<&'a R, IdLookupError> {
    if let Some(exact) = records.iter().find(|r| r.id() == query) {
        return Ok(exact);
    }

    let needle = query.to_uppercase();
    let matches: Vec<&R> = records
        .iter()
        .filter(|r| !needle.is_empty() && r.id().to_uppercase().starts_with(&needle))
        .collect();

    match matches.as_slice() {
        [] => Err(IdLookupError::NotFound {
            collection: R::COLLECTION.to_string(),
            query: query.to_string(),
        }),
        [only] => Ok(*only),
        many => Err(IdLookupError::Ambiguous {
            query: query.to_string(),
            candidates: many.iter().map(|r| r.id().to_string()).collect(),
        }),
    }
}
