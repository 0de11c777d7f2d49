use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeliveryRouteId(pub i64);

impl DeliveryRouteId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

// ============================================================================
// Record
// ============================================================================

/// Delivery route: a named set of consumers served by one delivery person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryRoute {
    pub id: DeliveryRouteId,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub delivery_person_name: Option<String>,
    #[serde(default)]
    pub consumer_count: u32,
    pub is_active: bool,
}
