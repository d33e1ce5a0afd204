//! Record trait - common interface for all stored collections

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// The five persisted collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Collection {
    Vehicles,
    Inquiries,
    PreOrders,
    Testimonials,
    HeroMedia,
}

impl Collection {
    /// Storage key holding the serialized collection
    pub const fn key(&self) -> &'static str {
        match self {
            Collection::Vehicles => "emphathon_cars",
            Collection::Inquiries => "emphathon_inquiries",
            Collection::PreOrders => "emphathon_preorders",
            Collection::Testimonials => "emphathon_testimonials",
            Collection::HeroMedia => "emphathon_hero_media",
        }
    }

    /// Short name used on the command line
    pub const fn as_str(&self) -> &'static str {
        match self {
            Collection::Vehicles => "vehicles",
            Collection::Inquiries => "inquiries",
            Collection::PreOrders => "preorders",
            Collection::Testimonials => "testimonials",
            Collection::HeroMedia => "hero-media",
        }
    }

    pub const fn all() -> &'static [Collection] {
        &[
            Collection::Vehicles,
            Collection::Inquiries,
            Collection::PreOrders,
            Collection::Testimonials,
            Collection::HeroMedia,
        ]
    }

    /// Look up a collection by its storage key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.key() == key)
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Collection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "vehicles" | "vehicle" | "cars" => Ok(Collection::Vehicles),
            "inquiries" | "inquiry" => Ok(Collection::Inquiries),
            "preorders" | "preorder" | "pre-orders" => Ok(Collection::PreOrders),
            "testimonials" | "testimonial" => Ok(Collection::Testimonials),
            "hero-media" | "hero" | "media" => Ok(Collection::HeroMedia),
            _ => Err(format!(
                "Unknown collection: {}. Use vehicles, inquiries, preorders, testimonials or hero-media",
                s
            )),
        }
    }
}

/// Common trait for every record type kept in a collection
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Collection this record type is stored in
    const COLLECTION: Collection;

    /// Identifier, unique within the collection
    fn id(&self) -> &str;

    /// Human-readable one-line label
    fn label(&self) -> String;

    /// Check the record's invariants
    fn validate(&self) -> Result<(), RecordError>;

    /// Default records written on first access
    fn seed() -> Vec<Self>;
}

/// A record that violates one of its invariants
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} must be a non-negative number, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
        value: i64,
    },

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

/// Fail with [`RecordError::Empty`] when `value` is blank
pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), RecordError> {
    if value.trim().is_empty() {
        Err(RecordError::Empty { field })
    } else {
        Ok(())
    }
}

/// Fail with [`RecordError::Negative`] unless `value` is finite and >= 0
pub fn require_non_negative(field: &'static str, value: f64) -> Result<(), RecordError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(RecordError::Negative { field, value })
    }
}

/// Loose email check: something before and after a single '@'
pub fn require_email(value: &str) -> Result<(), RecordError> {
    let mut parts = value.trim().split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(RecordError::InvalidEmail(value.to_string())),
    }
}
