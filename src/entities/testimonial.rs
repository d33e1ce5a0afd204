//! Client testimonial entity type

use serde::{Deserialize, Serialize};

use crate::core::entity::{require_non_empty, Collection, Record, RecordError};
use crate::core::identity::new_record_id;
use crate::core::seed;

/// Lowest and highest star rating
pub const RATING_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

/// A client testimonial shown on the home page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,

    /// Author name
    pub name: String,

    /// Author role or title
    pub role: String,

    pub content: String,

    /// Star rating, 1 to 5
    pub rating: u8,

    /// Avatar image URL
    #[serde(default)]
    pub avatar: String,
}

impl Testimonial {
    pub fn create(
        name: String,
        role: String,
        content: String,
        rating: u8,
        avatar: String,
    ) -> Result<Self, RecordError> {
        let testimonial = Self {
            id: new_record_id(),
            name,
            role,
            content,
            rating,
            avatar,
        };
        testimonial.validate()?;
        Ok(testimonial)
    }

    /// Rating rendered as filled stars
    pub fn stars(&self) -> String {
        "★".repeat(self.rating.min(*RATING_RANGE.end()) as usize)
    }
}

impl Record for Testimonial {
    const COLLECTION: Collection = Collection::Testimonials;

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        format!("{}, {}", self.name, self.role)
    }

    fn validate(&self) -> Result<(), RecordError> {
        require_non_empty("id", &self.id)?;
        require_non_empty("name", &self.name)?;
        require_non_empty("content", &self.content)?;
        if !RATING_RANGE.contains(&self.rating) {
            return Err(RecordError::OutOfRange {
                field: "rating",
                min: *RATING_RANGE.start() as i64,
                max: *RATING_RANGE.end() as i64,
                value: self.rating as i64,
            });
        }
        Ok(())
    }

    fn seed() -> Vec<Self> {
        seed::testimonials()
    }
}
