//! Embedded JSON Schemas for stored collections

use rust_embed::Embed;
use std::collections::HashMap;

use crate::core::Collection;

#[derive(Embed)]
#[folder = "schemas/"]
struct EmbeddedSchemas;

/// Schema text per collection
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    schemas: HashMap<Collection, String>,
}

impl SchemaRegistry {
    /// File name of the schema for a collection
    pub fn file_name(collection: Collection) -> String {
        format!("{}.schema.json", collection.as_str())
    }

    pub fn get(&self, collection: Collection) -> Option<&str> {
        self.schemas.get(&collection).map(String::as_str)
    }

    /// Collections that have a schema, in canonical order
    pub fn collections(&self) -> Vec<Collection> {
        Collection::all()
            .iter()
            .copied()
            .filter(|c| self.schemas.contains_key(c))
            .collect()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        let mut schemas = HashMap::new();
        for collection in Collection::all() {
            if let Some(file) = EmbeddedSchemas::get(&Self::file_name(*collection)) {
                let text = String::from_utf8_lossy(&file.data).into_owned();
                schemas.insert(*collection, text);
            }
        }
        Self { schemas }
    }
}
