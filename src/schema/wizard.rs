//! Schema-driven interactive prompts for new records
//!
//! Reads the item schema of a collection and asks for each field in turn.
//! Fields the caller fills in itself (ids, dates, statuses) are skipped.

use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use miette::{IntoDiagnostic, Result};
use serde_json::Value;
use std::collections::HashMap;

use crate::core::Collection;
use crate::schema::registry::SchemaRegistry;

/// Fields never prompted for
const AUTO_FIELDS: &[&str] = &["id", "date", "status"];

/// A schema-driven wizard for creating records
pub struct SchemaWizard {
    registry: SchemaRegistry,
    theme: ColorfulTheme,
}

/// Collected field values, keyed by stored field name
#[derive(Debug, Default)]
pub struct WizardResult {
    pub values: HashMap<String, Value>,
}

impl WizardResult {
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(|v| v.as_str())
    }

    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.values.get(key).and_then(|v| v.as_f64())
    }

    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.values.get(key).and_then(|v| v.as_i64())
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.values.get(key).and_then(|v| v.as_bool())
    }
}

#[derive(Debug)]
struct FieldInfo {
    name: String,
    field_type: FieldType,
    required: bool,
}

#[derive(Debug)]
enum FieldType {
    String,
    Enum { values: Vec<String> },
    Number { integer: bool },
    Boolean,
}

impl SchemaWizard {
    pub fn new() -> Self {
        Self {
            registry: SchemaRegistry::default(),
            theme: ColorfulTheme::default(),
        }
    }

    /// Prompt for `fields` of a collection's records, in the given order.
    /// Values already known go in `preset` and are not asked for.
    pub fn run(
        &self,
        collection: Collection,
        fields: &[&str],
        preset: &HashMap<String, Value>,
    ) -> Result<WizardResult> {
        let schema_str = self
            .registry
            .get(collection)
            .ok_or_else(|| miette::miette!("No schema found for {}", collection))?;
        let schema: Value = serde_json::from_str(schema_str).into_diagnostic()?;

        println!();
        println!(
            "{} New {} record",
            style("◆").cyan(),
            style(collection.as_str()).bold()
        );
        println!("{}", style("─".repeat(50)).dim());

        let mut result = WizardResult {
            values: preset.clone(),
        };
        for field in extract_fields(&schema, fields) {
            if result.values.contains_key(&field.name) {
                continue;
            }
            if let Some(v) = self.prompt_field(&field)? {
                result.values.insert(field.name, v);
            }
        }

        println!();
        Ok(result)
    }

    fn prompt_field(&self, field: &FieldInfo) -> Result<Option<Value>> {
        let prompt = format_prompt(&field.name);

        match &field.field_type {
            FieldType::Enum { values } => {
                let selection = Select::with_theme(&self.theme)
                    .with_prompt(&prompt)
                    .items(values)
                    .default(0)
                    .interact()
                    .into_diagnostic()?;
                Ok(Some(Value::String(values[selection].clone())))
            }

            FieldType::String => {
                let value: String = Input::with_theme(&self.theme)
                    .with_prompt(&prompt)
                    .allow_empty(!field.required)
                    .interact_text()
                    .into_diagnostic()?;

                if value.is_empty() && !field.required {
                    Ok(None)
                } else {
                    Ok(Some(Value::String(value)))
                }
            }

            FieldType::Number { integer } => {
                let value: String = Input::with_theme(&self.theme)
                    .with_prompt(&prompt)
                    .default("0".to_string())
                    .validate_with(|input: &String| -> std::result::Result<(), String> {
                        input
                            .trim()
                            .parse::<f64>()
                            .map(|_| ())
                            .map_err(|_| "enter a number".to_string())
                    })
                    .interact_text()
                    .into_diagnostic()?;

                let parsed: f64 = value.trim().parse().unwrap_or(0.0);
                if *integer {
                    Ok(Some(Value::from(parsed as i64)))
                } else {
                    Ok(Some(Value::from(parsed)))
                }
            }

            FieldType::Boolean => {
                let selection = Select::with_theme(&self.theme)
                    .with_prompt(&prompt)
                    .items(&["Yes", "No"])
                    .default(0)
                    .interact()
                    .into_diagnostic()?;
                Ok(Some(Value::Bool(selection == 0)))
            }
        }
    }
}

impl Default for SchemaWizard {
    fn default() -> Self {
        Self::new()
    }
}

/// Field descriptions for the requested names, skipping auto-managed ones
fn extract_fields(schema: &Value, order: &[&str]) -> Vec<FieldInfo> {
    let items = schema.get("items").unwrap_or(schema);
    let Some(props) = items.get("properties").and_then(|p| p.as_object()) else {
        return Vec::new();
    };
    let required: Vec<&str> = items
        .get("required")
        .and_then(|r| r.as_array())
        .map(|arr| arr.iter().filter_map(|v| v.as_str()).collect())
        .unwrap_or_default();

    order
        .iter()
        .filter(|name| !AUTO_FIELDS.contains(*name))
        .filter_map(|name| {
            let prop = props.get(*name)?;
            Some(FieldInfo {
                name: name.to_string(),
                field_type: parse_type(prop)?,
                required: required.contains(name),
            })
        })
        .collect()
}

fn parse_type(prop: &Value) -> Option<FieldType> {
    if let Some(values) = prop.get("enum").and_then(|e| e.as_array()) {
        return Some(FieldType::Enum {
            values: values
                .iter()
                .filter_map(|v| v.as_str())
                .map(String::from)
                .collect(),
        });
    }
    match prop.get("type").and_then(|t| t.as_str()) {
        Some("string") => Some(FieldType::String),
        Some("integer") => Some(FieldType::Number { integer: true }),
        Some("number") => Some(FieldType::Number { integer: false }),
        Some("boolean") => Some(FieldType::Boolean),
        _ => None,
    }
}

/// `customerEmail` -> `Customer Email`
fn format_prompt(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if i == 0 {
            out.extend(ch.to_uppercase());
        } else if ch.is_uppercase() {
            out.push(' ');
            out.push(ch);
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_prompt() {
        assert_eq!(format_prompt("customerEmail"), "Customer Email");
        assert_eq!(format_prompt("name"), "Name");
        assert_eq!(format_prompt("carId"), "Car Id");
    }

    #[test]
    fn test_extract_fields_follows_order_and_skips_auto() {
        let registry = SchemaRegistry::default();
        let schema: Value =
            serde_json::from_str(registry.get(Collection::Inquiries).unwrap()).unwrap();

        let fields = extract_fields(&schema, &["type", "id", "name", "email", "phone", "status"]);
        let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["type", "name", "email", "phone"]);
        assert!(matches!(fields[0].field_type, FieldType::Enum { .. }));
        assert!(fields[1].required);
        assert!(!fields[3].required);
    }

    #[test]
    fn test_extract_vehicle_fields() {
        let registry = SchemaRegistry::default();
        let schema: Value =
            serde_json::from_str(registry.get(Collection::Vehicles).unwrap()).unwrap();

        let fields = extract_fields(&schema, &["year", "price", "type", "availability"]);
        assert!(matches!(fields[0].field_type, FieldType::Number { integer: true }));
        assert!(matches!(fields[1].field_type, FieldType::Number { integer: false }));
        match &fields[3].field_type {
            FieldType::Enum { values } => {
                assert_eq!(values, &["In-Stock", "Pre-Order", "Sold"]);
            }
            other => panic!("unexpected field type: {other:?}"),
        }
    }

    #[test]
    fn test_extract_boolean_field() {
        let registry = SchemaRegistry::default();
        let schema: Value =
            serde_json::from_str(registry.get(Collection::HeroMedia).unwrap()).unwrap();

        let fields = extract_fields(&schema, &["title", "active"]);
        assert!(matches!(fields[1].field_type, FieldType::Boolean));
        assert!(fields[1].required);
    }

    #[test]
    fn test_result_accessors() {
        let mut result = WizardResult::default();
        result.values.insert("year".into(), Value::from(2024));
        result.values.insert("price".into(), Value::from(250000.5));
        result.values.insert("active".into(), Value::Bool(false));

        assert_eq!(result.get_i64("year"), Some(2024));
        assert_eq!(result.get_f64("year"), Some(2024.0));
        assert_eq!(result.get_f64("price"), Some(250000.5));
        assert_eq!(result.get_bool("active"), Some(false));
        assert_eq!(result.get_string("active"), None);
    }

    #[test]
    fn test_extract_number_fields() {
        let registry = SchemaRegistry::default();
        let schema: Value =
            serde_json::from_str(registry.get(Collection::PreOrders).unwrap()).unwrap();

        let fields = extract_fields(&schema, &["depositAmount"]);
        assert!(matches!(
            fields[0].field_type,
            FieldType::Number { integer: false }
        ));
    }
}
