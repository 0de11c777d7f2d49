use serde::{Deserialize, Serialize};

/// Role with the permission codes it grants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// `resource.action` strings
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default)]
    pub user_count: u32,
}
