//! Schema validation of stored collections with detailed error reporting

use jsonschema::{validator_for, ValidationError as JsonSchemaError, Validator as JsonValidator};
use miette::{Diagnostic, NamedSource, SourceSpan};
use serde_json::Value as JsonValue;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

use crate::core::Collection;
use crate::schema::registry::SchemaRegistry;

/// Validation error with source location information
#[derive(Debug, Error, Diagnostic)]
#[error("{collection}: schema validation failed: {summary}")]
#[diagnostic(code(showroom::schema::validation_error))]
pub struct ValidationError {
    collection: Collection,
    summary: String,

    #[source_code]
    src: NamedSource<String>,

    #[related]
    violations: Vec<SchemaViolation>,
}

/// A single schema violation
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct SchemaViolation {
    #[label("{}", self.hint)]
    span: SourceSpan,

    message: String,
    hint: String,

    #[help]
    help: Option<String>,
}

impl SchemaViolation {
    pub fn new(message: String, hint: String, span: SourceSpan, help: Option<String>) -> Self {
        Self {
            span,
            message,
            hint,
            help,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl ValidationError {
    pub fn new(
        collection: Collection,
        source: &str,
        violations: Vec<SchemaViolation>,
    ) -> Self {
        let count = violations.len();
        let summary = if count == 1 {
            "1 error".to_string()
        } else {
            format!("{} errors", count)
        };
        Self {
            collection,
            summary,
            src: NamedSource::new(format!("{}.json", collection.key()), source.to_string()),
            violations,
        }
    }

    pub fn collection(&self) -> Collection {
        self.collection
    }

    /// Get the number of violations
    pub fn violation_count(&self) -> usize {
        self.violations.len()
    }

    pub fn violations(&self) -> &[SchemaViolation] {
        &self.violations
    }
}

/// Schema validator with compiled schemas
pub struct Validator {
    /// Compiled JSON schemas by collection
    compiled: HashMap<Collection, JsonValidator>,
}

impl Validator {
    /// Create a new validator with schemas from the registry
    pub fn new(registry: &SchemaRegistry) -> Self {
        let mut compiled = HashMap::new();

        for collection in registry.collections() {
            if let Some(schema_str) = registry.get(collection) {
                if let Ok(schema_json) = serde_json::from_str::<JsonValue>(schema_str) {
                    if let Ok(compiled_schema) = validator_for(&schema_json) {
                        compiled.insert(collection, compiled_schema);
                    }
                }
            }
        }

        Self { compiled }
    }

    /// Validate stored collection text, collecting every violation.
    ///
    /// Returns the number of records on success.
    pub fn validate(&self, collection: Collection, content: &str) -> Result<usize, ValidationError> {
        let value: JsonValue = match serde_json::from_str(content) {
            Ok(v) => v,
            Err(e) => {
                let span = line_span(content, e.line(), e.column());
                let violation = SchemaViolation::new(
                    format!("JSON parse error: {}", e),
                    "invalid JSON".to_string(),
                    span,
                    Some("The stored collection must be a JSON array of records".to_string()),
                );
                return Err(ValidationError::new(collection, content, vec![violation]));
            }
        };

        let mut violations: Vec<SchemaViolation> = match self.compiled.get(&collection) {
            Some(schema) => schema
                .iter_errors(&value)
                .map(|e| error_to_violation(content, &e))
                .collect(),
            None => Vec::new(),
        };
        violations.extend(duplicate_id_violations(content, &value));

        if violations.is_empty() {
            Ok(value.as_array().map_or(0, Vec::len))
        } else {
            Err(ValidationError::new(collection, content, violations))
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        let registry = SchemaRegistry::default();
        Self::new(&registry)
    }
}

fn duplicate_id_violations(content: &str, value: &JsonValue) -> Vec<SchemaViolation> {
    let Some(items) = value.as_array() else {
        return Vec::new();
    };
    let mut seen = HashSet::new();
    let mut violations = Vec::new();
    for (index, item) in items.iter().enumerate() {
        let Some(id) = item.get("id").and_then(JsonValue::as_str) else {
            continue;
        };
        if !seen.insert(id) {
            violations.push(SchemaViolation::new(
                format!("Duplicate id '{}' at '/{}'", id, index),
                "duplicate id".to_string(),
                find_path_span(content, &format!("/{}/id", index)),
                Some("Identifiers must be unique within a collection".to_string()),
            ));
        }
    }
    violations
}

/// Convert a JSON Schema validation error to our violation format
fn error_to_violation(content: &str, error: &JsonSchemaError) -> SchemaViolation {
    let path = error.instance_path.to_string();
    let message = format_schema_error(error);
    let hint = format_error_hint(error);
    let help = generate_help_message(error);

    let span = find_path_span(content, &path);

    SchemaViolation::new(message, hint, span, help)
}

/// Format a JSON Schema error into a user-friendly message
fn format_schema_error(error: &JsonSchemaError) -> String {
    use jsonschema::error::ValidationErrorKind as Kind;

    let path = if error.instance_path.as_str().is_empty() {
        "document root".to_string()
    } else {
        format!("'{}'", error.instance_path)
    };

    match &error.kind {
        Kind::Required { property } => {
            let prop_str = property
                .as_str()
                .map(|s| s.to_string())
                .unwrap_or_else(|| property.to_string());
            format!("Missing required field: {} at {}", prop_str, path)
        }
        Kind::Type { kind } => format!("Wrong type at {}: expected {:?}", path, kind),
        Kind::Enum { options } => format!(
            "Invalid value at {}: must be one of: {}",
            path,
            format_enum_options(options)
        ),
        Kind::Pattern { .. } => format!("Value at {} is not well formed", path),
        Kind::MinLength { .. } => format!("Value at {} must not be empty", path),
        Kind::Minimum { limit } => format!("Value at {} is too small: minimum {}", path, limit),
        Kind::Maximum { limit } => format!("Value at {} is too large: maximum {}", path, limit),
        Kind::AdditionalProperties { unexpected } => {
            format!("Unknown field(s) at {}: {}", path, unexpected.join(", "))
        }
        _ => format!("Validation error at {}: {}", path, error),
    }
}

/// Format enum options as a string
fn format_enum_options(options: &JsonValue) -> String {
    if let Some(arr) = options.as_array() {
        arr.iter()
            .map(|v| v.as_str().map(|s| s.to_string()).unwrap_or_else(|| v.to_string()))
            .collect::<Vec<_>>()
            .join(", ")
    } else {
        options.to_string()
    }
}

/// Generate a short hint for the error label
fn format_error_hint(error: &JsonSchemaError) -> String {
    use jsonschema::error::ValidationErrorKind as Kind;

    match &error.kind {
        Kind::Required { .. } => "required field missing",
        Kind::Type { .. } => "wrong type",
        Kind::Enum { .. } => "invalid value",
        Kind::Pattern { .. } => "malformed",
        Kind::MinLength { .. } => "empty",
        Kind::Minimum { .. } | Kind::Maximum { .. } => "out of range",
        Kind::AdditionalProperties { .. } => "unknown field",
        _ => "validation error",
    }
    .to_string()
}

/// Generate a help message with suggestions for fixing the error
fn generate_help_message(error: &JsonSchemaError) -> Option<String> {
    use jsonschema::error::ValidationErrorKind as Kind;

    match &error.kind {
        Kind::Required { property } => {
            let prop_str = property
                .as_str()
                .map(|s| s.to_string())
                .unwrap_or_else(|| property.to_string());
            Some(format!("Add the '{}' field to the record", prop_str))
        }
        Kind::Enum { options } => Some(format!("Valid values: {}", format_enum_options(options))),
        Kind::Pattern { .. } => {
            let path = error.instance_path.to_string();
            if path.ends_with("mail") {
                Some("Email addresses look like name@example.com".to_string())
            } else {
                None
            }
        }
        Kind::AdditionalProperties { unexpected } => {
            if unexpected.len() == 1 {
                Some(format!("Remove the '{}' field or check spelling", unexpected[0]))
            } else {
                Some("Remove unknown fields or check spelling".to_string())
            }
        }
        _ => None,
    }
}

/// Span of the rest of the line at a 1-based line/column
fn line_span(content: &str, line: usize, column: usize) -> SourceSpan {
    let mut offset = 0;
    for (i, text) in content.split_inclusive('\n').enumerate() {
        if i + 1 == line.max(1) {
            offset += column.saturating_sub(1).min(text.len());
            break;
        }
        offset += text.len();
    }
    let offset = offset.min(content.len());
    let rest = &content[offset..];
    let len = rest.find('\n').unwrap_or(rest.len()).max(1);
    (offset, len.min(content.len().saturating_sub(offset))).into()
}

/// Byte ranges of each top-level element of a JSON array
fn element_ranges(content: &str) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    let mut start = None;

    for (i, ch) in content.char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' | '[' => {
                if depth == 1 {
                    start = Some(i);
                }
                depth += 1;
            }
            '}' | ']' => {
                depth = depth.saturating_sub(1);
                if depth == 1 {
                    if let Some(s) = start.take() {
                        ranges.push((s, i + 1));
                    }
                }
            }
            _ => {}
        }
    }
    ranges
}

/// Find the span for a JSON pointer such as `/2/price` in collection text
fn find_path_span(content: &str, json_path: &str) -> SourceSpan {
    let parts: Vec<&str> = json_path.split('/').filter(|s| !s.is_empty()).collect();

    let fallback = || -> SourceSpan {
        let len = content.find('\n').unwrap_or(content.len()).max(1);
        (0, len.min(content.len())).into()
    };

    let Some(index) = parts.first().and_then(|p| p.parse::<usize>().ok()) else {
        return fallback();
    };
    let Some(&(start, end)) = element_ranges(content).get(index) else {
        return fallback();
    };

    // Nearest non-index component names the field
    let field = parts[1..].iter().rev().find(|p| p.parse::<usize>().is_err());
    if let Some(field) = field {
        let needle = format!("\"{}\"", field);
        if let Some(pos) = content[start..end].find(&needle) {
            let key_start = start + pos;
            let line_end = content[key_start..end]
                .find('\n')
                .map_or(end, |n| key_start + n);
            return (key_start, line_end - key_start).into();
        }
    }

    // Whole record: highlight its first line
    let first_line = content[start..end].find('\n').map_or(end - start, |n| n);
    (start, first_line.max(1)).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::seed;

    fn validator() -> Validator {
        Validator::new(&SchemaRegistry::default())
    }

    #[test]
    fn test_validator_creation() {
        let validator = validator();
        for collection in Collection::all() {
            assert!(validator.compiled.contains_key(collection));
        }
    }

    #[test]
    fn test_seed_data_passes() {
        let validator = validator();
        let cars = serde_json::to_string_pretty(&seed::vehicles()).unwrap();
        assert_eq!(validator.validate(Collection::Vehicles, &cars).unwrap(), 4);

        let slides = serde_json::to_string_pretty(&seed::hero_media()).unwrap();
        assert_eq!(validator.validate(Collection::HeroMedia, &slides).unwrap(), 2);

        let quotes = serde_json::to_string_pretty(&seed::testimonials()).unwrap();
        assert!(validator.validate(Collection::Testimonials, &quotes).is_ok());
    }

    #[test]
    fn test_empty_collection_passes() {
        assert_eq!(validator().validate(Collection::Inquiries, "[]").unwrap(), 0);
    }

    #[test]
    fn test_bad_enum_value() {
        let mut cars = serde_json::to_value(seed::vehicles()).unwrap();
        cars[1]["availability"] = JsonValue::from("Leased");
        let text = serde_json::to_string_pretty(&cars).unwrap();

        let err = validator().validate(Collection::Vehicles, &text).unwrap_err();
        assert_eq!(err.violation_count(), 1);
        assert!(err.violations()[0].message().contains("/1/availability"));
    }

    #[test]
    fn test_rating_out_of_range() {
        let text = r#"[{"id": "t1", "name": "A", "role": "", "content": "", "rating": 9}]"#;
        let err = validator()
            .validate(Collection::Testimonials, text)
            .unwrap_err();
        assert!(err.violations()[0].message().contains("maximum"));
    }

    #[test]
    fn test_missing_field_and_bad_email() {
        let text = r#"[
  {"id": "p1", "carId": "3", "userId": "guest", "customerName": "Bo",
   "customerEmail": "not-an-email", "depositAmount": 5000, "status": "Pending"}
]"#;
        let err = validator().validate(Collection::PreOrders, text).unwrap_err();
        assert_eq!(err.violation_count(), 2);
    }

    #[test]
    fn test_duplicate_ids_reported() {
        let mut slides = seed::hero_media();
        slides[1].id = slides[0].id.clone();
        let text = serde_json::to_string_pretty(&slides).unwrap();

        let err = validator().validate(Collection::HeroMedia, &text).unwrap_err();
        assert_eq!(err.violation_count(), 1);
        assert!(err.violations()[0].message().contains("Duplicate id"));
    }

    #[test]
    fn test_parse_error_reported() {
        let err = validator()
            .validate(Collection::Vehicles, "[{\"id\": ")
            .unwrap_err();
        assert!(err.violations()[0].message().starts_with("JSON parse error"));
    }

    #[test]
    fn test_element_ranges() {
        let text = r#"[{"a": "}"}, {"b": [1, {"c": 2}]}]"#;
        let ranges = element_ranges(text);
        assert_eq!(ranges.len(), 2);
        assert_eq!(&text[ranges[0].0..ranges[0].1], r#"{"a": "}"}"#);
        assert_eq!(&text[ranges[1].0..ranges[1].1], r#"{"b": [1, {"c": 2}]}"#);
    }

    #[test]
    fn test_find_path_span_points_at_field() {
        let text = "[\n  {\"id\": \"1\",\n   \"price\": -1}\n]";
        let span = find_path_span(text, "/0/price");
        let start = span.offset();
        assert!(text[start..].starts_with("\"price\""));
    }
}
