//! Hero media slide entity type

use serde::{Deserialize, Serialize};

use crate::core::entity::{require_non_empty, Collection, Record, RecordError};
use crate::core::identity::new_record_id;
use crate::core::seed;

/// Kind of media shown in a slide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Image,
    Video,
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Image => write!(f, "image"),
            MediaKind::Video => write!(f, "video"),
        }
    }
}

impl std::str::FromStr for MediaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "image" => Ok(MediaKind::Image),
            "video" => Ok(MediaKind::Video),
            _ => Err(format!("Unknown media type: {}. Use image or video", s)),
        }
    }
}

/// A promotional slide for the landing page showcase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroMedia {
    pub id: String,

    #[serde(rename = "type")]
    pub kind: MediaKind,

    pub url: String,

    pub title: String,

    #[serde(default)]
    pub subtitle: String,

    /// Whether the slide takes part in the rotation
    #[serde(default)]
    pub active: bool,
}

impl HeroMedia {
    /// Create an active slide
    pub fn create(
        kind: MediaKind,
        url: String,
        title: String,
        subtitle: String,
    ) -> Result<Self, RecordError> {
        let media = Self {
            id: new_record_id(),
            kind,
            url,
            title,
            subtitle,
            active: true,
        };
        media.validate()?;
        Ok(media)
    }
}

impl Record for HeroMedia {
    const COLLECTION: Collection = Collection::HeroMedia;

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        self.title.clone()
    }

    fn validate(&self) -> Result<(), RecordError> {
        require_non_empty("id", &self.id)?;
        require_non_empty("url", &self.url)?;
        require_non_empty("title", &self.title)?;
        Ok(())
    }

    fn seed() -> Vec<Self> {
        seed::hero_media()
    }
}
