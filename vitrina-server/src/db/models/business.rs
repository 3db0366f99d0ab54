//! Business Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use shared::models::Category;
use surrealdb::RecordId;

/// Business ID type
pub type BusinessId = RecordId;

/// Business row matching the `business` table
///
/// `id` is omitted when serializing a fresh row so the datastore
/// assigns one; record links stay native so queries can compare them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Business {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<BusinessId>,
    /// Owning profile
    pub owner: RecordId,
    pub name: String,
    pub category: Category,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub image_url: Option<String>,
    pub location_lat: Option<f64>,
    pub location_lng: Option<f64>,
    /// Public visibility, admin-controlled
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub active: bool,
    /// End of the paid window, informational only
    pub subscription_expires_at: Option<i64>,
    #[serde(default)]
    pub created_at: i64,
}

/// Create business payload (owner and activation are decided server-side)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessCreate {
    pub name: String,
    pub category: Category,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub image_url: Option<String>,
    pub location_lat: Option<f64>,
    pub location_lng: Option<f64>,
}

/// Update business payload, profile fields only. `active` and
/// `subscription_expires_at` are deliberately absent: visibility is the
/// administrator's, the expiry date is the payment simulation's.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BusinessUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_lng: Option<f64>,
}

impl From<Business> for shared::Business {
    fn from(b: Business) -> Self {
        shared::Business {
            id: b.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
            owner_id: b.owner.to_string(),
            name: b.name,
            category: b.category,
            description: b.description,
            phone: b.phone,
            image_url: b.image_url,
            location_lat: b.location_lat,
            location_lng: b.location_lng,
            active: b.active,
            subscription_expires_at: b.subscription_expires_at,
            created_at: b.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Update payloads are applied with MERGE; unset fields must stay
    // out of the patch entirely or they would null existing columns.
    #[test]
    fn test_empty_update_serializes_to_empty_patch() {
        let patch = BusinessUpdate::default();
        assert_eq!(serde_json::to_string(&patch).unwrap(), "{}");
    }

    #[test]
    fn test_partial_update_only_carries_set_fields() {
        let patch = BusinessUpdate {
            phone: Some("5493510000000".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 1);
        assert_eq!(json["phone"], "5493510000000");
    }
}
