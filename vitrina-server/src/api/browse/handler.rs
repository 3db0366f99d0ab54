//! Public browse handlers
//!
//! Visitor-facing views: only `active` businesses surface, promotions
//! only through an active parent. Collections are loaded in full and
//! reduced in memory by the filter engine on every request.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use shared::models::{Category, PublicPromotion};

use crate::browse::{business_criteria, join_public_promotions, promotion_criteria};
use crate::core::ServerState;
use crate::db::repository::{BusinessRepository, PromotionRepository};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct BrowseBusinessesQuery {
    /// Free-text term against name/description
    #[serde(default)]
    pub term: String,
    /// Exact category (Spanish display string)
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BrowsePromotionsQuery {
    #[serde(default)]
    pub term: String,
    pub category: Option<String>,
    /// Weekday 0-6 (0 = Sunday)
    pub day: Option<u8>,
}

fn parse_category(raw: &Option<String>) -> AppResult<Option<Category>> {
    match raw {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => s
            .parse::<Category>()
            .map(Some)
            .map_err(|e| AppError::validation(e.to_string())),
    }
}

/// GET /api/browse/businesses - 公开商家列表
pub async fn businesses(
    State(state): State<ServerState>,
    Query(query): Query<BrowseBusinessesQuery>,
) -> AppResult<Json<Vec<shared::Business>>> {
    let category = parse_category(&query.category)?;

    let repo = BusinessRepository::new(state.get_db());
    let listings: Vec<shared::Business> = repo
        .find_active()
        .await?
        .into_iter()
        .map(|b| b.into())
        .collect();

    let filtered = business_criteria(&query.term, category).apply(listings);
    Ok(Json(filtered))
}

/// GET /api/browse/promotions - 公开促销列表
///
/// 仅包含 active 商家的促销；按周几筛选时要求该日在
/// `days_of_week` 集合中。
pub async fn promotions(
    State(state): State<ServerState>,
    Query(query): Query<BrowsePromotionsQuery>,
) -> AppResult<Json<Vec<PublicPromotion>>> {
    let category = parse_category(&query.category)?;
    if let Some(day) = query.day
        && day > 6
    {
        return Err(AppError::validation(format!(
            "invalid day of week: {day} (expected 0-6)"
        )));
    }

    let business_repo = BusinessRepository::new(state.get_db());
    let promo_repo = PromotionRepository::new(state.get_db());

    let active: Vec<shared::Business> = business_repo
        .find_active()
        .await?
        .into_iter()
        .map(|b| b.into())
        .collect();
    let promotions: Vec<shared::Promotion> = promo_repo
        .find_all()
        .await?
        .into_iter()
        .map(|p| p.into())
        .collect();

    let pairs = join_public_promotions(&active, promotions);
    let filtered = promotion_criteria(&query.term, category, query.day).apply(pairs);
    Ok(Json(filtered))
}
