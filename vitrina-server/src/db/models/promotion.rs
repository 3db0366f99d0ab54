//! Promotion Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Promotion ID type
pub type PromotionId = RecordId;

/// Promotion row matching the `promotion` table
///
/// No `active` flag of its own: visibility follows the parent business.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Promotion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PromotionId>,
    /// Parent business
    pub business: RecordId,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    /// Weekdays 0-6 (0 = Sunday), deduplicated, non-empty once saved
    pub days_of_week: Vec<u8>,
    #[serde(default)]
    pub created_at: i64,
}

/// Create promotion payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromotionCreate {
    pub business_id: String,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub days_of_week: Vec<u8>,
}

/// Update promotion payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromotionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_of_week: Option<Vec<u8>>,
}

impl From<Promotion> for shared::Promotion {
    fn from(p: Promotion) -> Self {
        shared::Promotion {
            id: p.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
            business_id: p.business.to_string(),
            title: p.title,
            description: p.description,
            image_url: p.image_url,
            days_of_week: p.days_of_week,
            created_at: p.created_at,
        }
    }
}
