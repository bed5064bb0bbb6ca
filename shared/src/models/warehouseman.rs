//! Warehouse staff (users)

use serde::{Deserialize, Serialize};

/// An authenticated user of the app, identified by a secret key.
/// Persisted client-side post-login as the current session value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warehouseman {
    pub id: i64,
    pub name: String,
    pub secret_key: String,
    pub city: String,
    /// Date of birth as shipped by the backend (plain string).
    #[serde(default)]
    pub dob: String,
}
