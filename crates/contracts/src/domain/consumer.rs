use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::delivery_route::DeliveryRouteId;

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConsumerId(pub i64);

// ============================================================================
// Record
// ============================================================================

/// Gas consumer (household or commercial connection).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Consumer {
    pub id: ConsumerId,
    /// Connection number printed on the consumer book
    pub consumer_number: String,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub route: Option<DeliveryRouteId>,
    #[serde(default)]
    pub route_name: Option<String>,
    #[serde(default)]
    pub cylinders_held: u32,
    #[serde(default)]
    pub last_delivery_on: Option<NaiveDate>,
    pub is_active: bool,
}
