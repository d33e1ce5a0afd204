//! JSON helpers for stored collections

pub mod diagnostics;

pub use diagnostics::JsonSyntaxError;

use serde::de::DeserializeOwned;

/// Parse a stored collection, mapping failures to a located diagnostic
pub fn parse_collection<T: DeserializeOwned>(
    source: &str,
    key: &str,
) -> Result<Vec<T>, JsonSyntaxError> {
    serde_json::from_str(source).map_err(|e| JsonSyntaxError::from_serde_error(&e, source, key))
}
