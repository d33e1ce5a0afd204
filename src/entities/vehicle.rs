//! Vehicle listing entity type

use serde::{Deserialize, Serialize};

use crate::core::entity::{require_non_empty, require_non_negative, Collection, Record, RecordError};
use crate::core::identity::new_record_id;
use crate::core::seed;

/// Sales category of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleCategory {
    Corporate,
    Individual,
}

impl VehicleCategory {
    pub const fn as_str(&self) -> &'static str {
        match self {
            VehicleCategory::Corporate => "Corporate",
            VehicleCategory::Individual => "Individual",
        }
    }
}

impl std::fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for VehicleCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "corporate" => Ok(VehicleCategory::Corporate),
            "individual" => Ok(VehicleCategory::Individual),
            _ => Err(format!("Unknown category: {}. Use Corporate or Individual", s)),
        }
    }
}

/// Availability of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Availability {
    #[serde(rename = "In-Stock")]
    InStock,
    #[serde(rename = "Pre-Order")]
    PreOrder,
    Sold,
}

impl Availability {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Availability::InStock => "In-Stock",
            Availability::PreOrder => "Pre-Order",
            Availability::Sold => "Sold",
        }
    }
}

impl Default for Availability {
    fn default() -> Self {
        Availability::InStock
    }
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Availability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "in-stock" | "instock" => Ok(Availability::InStock),
            "pre-order" | "preorder" => Ok(Availability::PreOrder),
            "sold" => Ok(Availability::Sold),
            _ => Err(format!(
                "Unknown availability: {}. Use In-Stock, Pre-Order or Sold",
                s
            )),
        }
    }
}

/// A vehicle listing in the showroom inventory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    /// Unique identifier
    pub id: String,

    pub brand: String,

    pub model: String,

    /// Model year
    pub year: i32,

    /// Asking price, currency-agnostic
    pub price: f64,

    /// Primary image URL
    pub image: String,

    pub mileage: u32,

    pub fuel_type: String,

    pub transmission: String,

    pub description: String,

    /// Sales category
    #[serde(rename = "type")]
    pub category: VehicleCategory,

    pub availability: Availability,

    /// Feature tags, in display order
    #[serde(default)]
    pub features: Vec<String>,
}

/// Field values for a new listing; the id is assigned on creation
#[derive(Debug, Clone, PartialEq)]
pub struct NewVehicle {
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub price: f64,
    pub image: String,
    pub mileage: u32,
    pub fuel_type: String,
    pub transmission: String,
    pub description: String,
    pub category: VehicleCategory,
    pub availability: Availability,
    pub features: Vec<String>,
}

impl Vehicle {
    /// Create a validated listing with a fresh identifier
    pub fn create(fields: NewVehicle) -> Result<Self, RecordError> {
        let vehicle = Self {
            id: new_record_id(),
            brand: fields.brand,
            model: fields.model,
            year: fields.year,
            price: fields.price,
            image: fields.image,
            mileage: fields.mileage,
            fuel_type: fields.fuel_type,
            transmission: fields.transmission,
            description: fields.description,
            category: fields.category,
            availability: fields.availability,
            features: fields.features,
        };
        vehicle.validate()?;
        Ok(vehicle)
    }

    /// "Brand Model" display name
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }

    /// Listings from the current model year onward are badged "Brand New"
    pub fn is_brand_new(&self) -> bool {
        self.year > 2023
    }
}

impl Record for Vehicle {
    const COLLECTION: Collection = Collection::Vehicles;

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        self.display_name()
    }

    fn validate(&self) -> Result<(), RecordError> {
        require_non_empty("id", &self.id)?;
        require_non_empty("brand", &self.brand)?;
        require_non_empty("model", &self.model)?;
        require_non_negative("price", self.price)?;
        if !(1886..=2100).contains(&self.year) {
            return Err(RecordError::OutOfRange {
                field: "year",
                min: 1886,
                max: 2100,
                value: self.year as i64,
            });
        }
        Ok(())
    }

    fn seed() -> Vec<Self> {
        seed::vehicles()
    }
}
