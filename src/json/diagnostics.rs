//! JSON error diagnostics for stored collections

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A stored collection that failed to deserialize, with source location
#[derive(Debug, Error, Diagnostic)]
#[error("malformed stored data in '{key}': {message}")]
#[diagnostic(code(showroom::store::malformed))]
pub struct JsonSyntaxError {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    #[help]
    help: Option<String>,

    /// Storage key the text was read from
    pub key: String,

    /// The underlying serde_json message
    pub message: String,

    pub line: usize,
    pub column: usize,
}

impl JsonSyntaxError {
    /// Build a diagnostic from a serde_json error over `source`
    pub fn from_serde_error(err: &serde_json::Error, source: &str, key: &str) -> Self {
        let line = err.line().max(1);
        let column = err.column().max(1);
        let offset = line_col_to_offset(source, line, column).min(source.len());
        let message = err.to_string();
        let help = generate_help(err, &message);

        Self {
            src: NamedSource::new(format!("{}.json", key), source.to_string()),
            span: SourceSpan::from(offset..(offset + 1).min(source.len())),
            help,
            key: key.to_string(),
            message,
            line,
            column,
        }
    }
}

/// Convert a 1-based line/column to a byte offset
fn line_col_to_offset(source: &str, line: usize, column: usize) -> usize {
    let mut line_start = 0;
    for (i, text) in source.split_inclusive('\n').enumerate() {
        if i + 1 == line {
            let col_offset = text
                .char_indices()
                .nth(column.saturating_sub(1))
                .map(|(j, _)| j)
                .unwrap_or(text.len());
            return line_start + col_offset;
        }
        line_start += text.len();
    }
    source.len()
}

fn generate_help(err: &serde_json::Error, message: &str) -> Option<String> {
    use serde_json::error::Category;

    match err.classify() {
        Category::Eof => Some("The stored text ends early; the file was probably truncated.".to_string()),
        Category::Syntax => {
            if message.contains("trailing comma") {
                Some("Remove the comma after the last element.".to_string())
            } else {
                Some("The stored collection must be a JSON array of records.".to_string())
            }
        }
        Category::Data => {
            if message.contains("unknown variant") {
                Some("Enumerated fields are case-sensitive, e.g. \"In-Stock\", \"Corporate\".".to_string())
            } else if message.contains("missing field") {
                Some("Every record needs all required fields; see `showroom validate`.".to_string())
            } else {
                None
            }
        }
        Category::Io => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_col_to_offset() {
        let source = "line1\nline2\nline3";
        assert_eq!(line_col_to_offset(source, 1, 1), 0);
        assert_eq!(line_col_to_offset(source, 2, 1), 6);
        assert_eq!(line_col_to_offset(source, 3, 3), 14);
        assert_eq!(line_col_to_offset(source, 9, 1), source.len());
    }

    #[test]
    fn test_from_serde_error_points_at_location() {
        let source = "[\n  {\"id\": 1,}\n]";
        let err = serde_json::from_str::<serde_json::Value>(source).unwrap_err();
        let diag = JsonSyntaxError::from_serde_error(&err, source, "emphathon_cars");
        assert_eq!(diag.line, 2);
        assert_eq!(diag.key, "emphathon_cars");
        assert!(diag.help.is_some());
    }

    #[test]
    fn test_eof_help() {
        let source = "[{\"id\": \"1\"";
        let err = serde_json::from_str::<serde_json::Value>(source).unwrap_err();
        let diag = JsonSyntaxError::from_serde_error(&err, source, "k");
        assert!(diag.help.unwrap().contains("truncated"));
    }
}
