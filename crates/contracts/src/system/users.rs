use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Row of the user management grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub is_superuser: bool,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
}
