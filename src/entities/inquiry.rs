//! Customer inquiry entity type

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::entity::{require_email, require_non_empty, Collection, Record, RecordError};
use crate::core::identity::new_record_id;

/// Channel an inquiry came through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InquiryKind {
    General,
    #[serde(rename = "Walk-In")]
    WalkIn,
    Corporate,
}

impl InquiryKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            InquiryKind::General => "General",
            InquiryKind::WalkIn => "Walk-In",
            InquiryKind::Corporate => "Corporate",
        }
    }
}

impl std::fmt::Display for InquiryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for InquiryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "general" => Ok(InquiryKind::General),
            "walk-in" | "walkin" => Ok(InquiryKind::WalkIn),
            "corporate" => Ok(InquiryKind::Corporate),
            _ => Err(format!(
                "Unknown inquiry type: {}. Use General, Walk-In or Corporate",
                s
            )),
        }
    }
}

/// Follow-up state of an inquiry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InquiryStatus {
    #[default]
    Pending,
    Contacted,
    Closed,
}

impl InquiryStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            InquiryStatus::Pending => "Pending",
            InquiryStatus::Contacted => "Contacted",
            InquiryStatus::Closed => "Closed",
        }
    }
}

impl std::fmt::Display for InquiryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for InquiryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(InquiryStatus::Pending),
            "contacted" => Ok(InquiryStatus::Contacted),
            "closed" => Ok(InquiryStatus::Closed),
            _ => Err(format!(
                "Unknown inquiry status: {}. Use Pending, Contacted or Closed",
                s
            )),
        }
    }
}

/// A customer inquiry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: String,

    pub name: String,

    pub email: String,

    #[serde(default)]
    pub phone: String,

    /// Vehicle the inquiry is about (not checked against the inventory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car_id: Option<String>,

    pub message: String,

    #[serde(rename = "type")]
    pub kind: InquiryKind,

    /// Submission timestamp
    pub date: DateTime<Utc>,

    #[serde(default)]
    pub status: InquiryStatus,
}

impl Inquiry {
    /// Create a pending inquiry stamped with the current time
    pub fn create(
        kind: InquiryKind,
        name: String,
        email: String,
        phone: String,
        message: String,
        car_id: Option<String>,
    ) -> Result<Self, RecordError> {
        let inquiry = Self {
            id: new_record_id(),
            name,
            email,
            phone,
            car_id,
            message,
            kind,
            date: Utc::now(),
            status: InquiryStatus::Pending,
        };
        inquiry.validate()?;
        Ok(inquiry)
    }
}

impl Record for Inquiry {
    const COLLECTION: Collection = Collection::Inquiries;

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }

    fn validate(&self) -> Result<(), RecordError> {
        require_non_empty("id", &self.id)?;
        require_non_empty("name", &self.name)?;
        require_email(&self.email)?;
        Ok(())
    }

    fn seed() -> Vec<Self> {
        Vec::new()
    }
}
