//! Config Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Key/value row of the `config` table. The record key doubles as the
/// config key, so each entry is a singleton per key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub key: String,
    pub value: f64,
}

/// The single config key the application reads and writes
pub const CONFIG_SUBSCRIPTION_PRICE: &str = "subscription_price";
