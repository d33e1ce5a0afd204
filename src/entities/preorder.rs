//! Pre-order reservation entity type

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::entity::{
    require_email, require_non_empty, require_non_negative, Collection, Record, RecordError,
};
use crate::core::identity::new_record_id;

/// Review state of a reservation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PreOrderStatus {
    #[default]
    Pending,
    Approved,
    Cancelled,
}

impl PreOrderStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            PreOrderStatus::Pending => "Pending",
            PreOrderStatus::Approved => "Approved",
            PreOrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for PreOrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PreOrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(PreOrderStatus::Pending),
            "approved" | "approve" => Ok(PreOrderStatus::Approved),
            "cancelled" | "canceled" | "cancel" | "rejected" | "reject" => {
                Ok(PreOrderStatus::Cancelled)
            }
            _ => Err(format!(
                "Unknown pre-order status: {}. Use Pending, Approved or Cancelled",
                s
            )),
        }
    }
}

/// A deposit-backed reservation for a vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreOrder {
    pub id: String,

    /// Reserved vehicle (not checked against the inventory)
    pub car_id: String,

    /// Requester identifier
    pub user_id: String,

    pub customer_name: String,

    pub customer_email: String,

    pub deposit_amount: f64,

    #[serde(default)]
    pub status: PreOrderStatus,

    pub date: DateTime<Utc>,
}

impl PreOrder {
    /// Create a pending reservation stamped with the current time
    pub fn create(
        car_id: String,
        user_id: String,
        customer_name: String,
        customer_email: String,
        deposit_amount: f64,
    ) -> Result<Self, RecordError> {
        let order = Self {
            id: new_record_id(),
            car_id,
            user_id,
            customer_name,
            customer_email,
            deposit_amount,
            status: PreOrderStatus::Pending,
            date: Utc::now(),
        };
        order.validate()?;
        Ok(order)
    }
}

impl Record for PreOrder {
    const COLLECTION: Collection = Collection::PreOrders;

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        format!("{} ({})", self.customer_name, self.car_id)
    }

    fn validate(&self) -> Result<(), RecordError> {
        require_non_empty("id", &self.id)?;
        require_non_empty("carId", &self.car_id)?;
        require_non_empty("customerName", &self.customer_name)?;
        require_email(&self.customer_email)?;
        require_non_negative("depositAmount", self.deposit_amount)?;
        Ok(())
    }

    fn seed() -> Vec<Self> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_pending() {
        let order = PreOrder::create(
            "3".to_string(),
            "sarah".to_string(),
            "Sarah Jenkins".to_string(),
            "sarah@example.com".to_string(),
            15000.0,
        )
        .unwrap();
        assert_eq!(order.status, PreOrderStatus::Pending);
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["depositAmount"], 15000.0);
        assert_eq!(json["carId"], "3");
    }

    #[test]
    fn test_rejects_negative_deposit() {
        let err = PreOrder::create(
            "3".to_string(),
            "u".to_string(),
            "Name".to_string(),
            "n@example.com".to_string(),
            -1.0,
        )
        .unwrap_err();
        assert!(matches!(err, RecordError::Negative { field: "depositAmount", .. }));
    }

    #[test]
    fn test_status_aliases() {
        assert_eq!("reject".parse::<PreOrderStatus>().unwrap(), PreOrderStatus::Cancelled);
        assert_eq!("Approved".parse::<PreOrderStatus>().unwrap(), PreOrderStatus::Approved);
    }
}
