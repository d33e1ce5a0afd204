//! Inventory filtering
//!
//! A listing is visible when it passes all three filters: brand, category
//! and free-text search. The scan is linear and keeps collection order.

use crate::entities::{Vehicle, VehicleCategory};

/// Label used for "no restriction" in option lists
pub const ALL: &str = "All";

/// Either no restriction or one required value
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Selection<T> {
    /// Whether `value` passes this selection
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(required) => required == value,
        }
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selection::All => write!(f, "{}", ALL),
            Selection::Only(v) => write!(f, "{}", v),
        }
    }
}

impl<T> From<Option<T>> for Selection<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Selection::All, Selection::Only)
    }
}

impl std::str::FromStr for Selection<String> {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case(ALL) {
            Ok(Selection::All)
        } else {
            Ok(Selection::Only(s.to_string()))
        }
    }
}

impl std::str::FromStr for Selection<VehicleCategory> {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case(ALL) {
            Ok(Selection::All)
        } else {
            s.parse().map(Selection::Only)
        }
    }
}

/// Transient filter state for the inventory view
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InventoryFilter {
    /// Exact brand match
    pub brand: Selection<String>,
    pub category: Selection<VehicleCategory>,
    /// Case-insensitive substring of model or brand
    pub search: String,
}

impl InventoryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn brand(mut self, brand: impl Into<Selection<String>>) -> Self {
        self.brand = brand.into();
        self
    }

    pub fn category(mut self, category: impl Into<Selection<VehicleCategory>>) -> Self {
        self.category = category.into();
        self
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    /// Back to All / All / ""
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_unfiltered(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        let matches_brand = self.brand.admits(&vehicle.brand);
        let matches_category = self.category.admits(&vehicle.category);
        let needle = self.search.to_lowercase();
        let matches_search = needle.is_empty()
            || vehicle.model.to_lowercase().contains(&needle)
            || vehicle.brand.to_lowercase().contains(&needle);
        matches_brand && matches_category && matches_search
    }

    /// The visible subset, in collection order
    pub fn apply<'a>(&self, vehicles: &'a [Vehicle]) -> Vec<&'a Vehicle> {
        vehicles.iter().filter(|v| self.matches(v)).collect()
    }
}

impl From<VehicleCategory> for Selection<VehicleCategory> {
    fn from(value: VehicleCategory) -> Self {
        Selection::Only(value)
    }
}

/// Brand dropdown entries: "All", then each brand in first-seen order
pub fn brand_options(vehicles: &[Vehicle]) -> Vec<String> {
    let mut options = vec![ALL.to_string()];
    for v in vehicles {
        if !options[1..].contains(&v.brand) {
            options.push(v.brand.clone());
        }
    }
    options
}

/// Category dropdown entries
pub fn category_options() -> [&'static str; 3] {
    [
        ALL,
        VehicleCategory::Individual.as_str(),
        VehicleCategory::Corporate.as_str(),
    ]
}
