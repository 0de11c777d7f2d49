use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeliveryPersonId(pub i64);

// ============================================================================
// Record
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryPerson {
    pub id: DeliveryPersonId,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub vehicle_number: Option<String>,
    #[serde(default)]
    pub route_names: Vec<String>,
    #[serde(default)]
    pub joined_on: Option<NaiveDate>,
    pub is_active: bool,
}
