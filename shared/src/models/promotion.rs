//! Promotion Model

use serde::{Deserialize, Serialize};

use super::Category;

/// Weekly recurring promotion attached to one business
///
/// `days_of_week` holds weekday numbers 0-6 (0 = Sunday), deduplicated,
/// never empty once saved. Visibility is inherited from the parent
/// business's `active` flag; promotions carry no flag of their own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Promotion {
    pub id: String,
    pub business_id: String,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub days_of_week: Vec<u8>,
    pub created_at: i64,
}

/// Promotion joined with its parent business, as served by the public
/// browse view. Only built for businesses with `active = true`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicPromotion {
    pub id: String,
    pub business_id: String,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub days_of_week: Vec<u8>,
    pub business_name: String,
    pub business_category: Category,
}
