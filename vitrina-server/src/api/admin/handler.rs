//! Admin Handlers
//!
//! Moderation never touches expiry: `is_expired` is derived for the
//! table only, deactivation stays a manual decision.

use std::collections::HashSet;

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use shared::models::AdminBusiness;

use crate::core::ServerState;
use crate::db::models::CONFIG_SUBSCRIPTION_PRICE;
use crate::db::repository::{BusinessRepository, ConfigRepository, PromotionRepository};
use crate::services::{CleanupReport, ImageCleanupService};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct SetActiveRequest {
    pub active: bool,
}

#[derive(Debug, Deserialize)]
pub struct PriceUpdateRequest {
    pub value: f64,
}

/// GET /api/admin/businesses - 审核表（全部商家 + 到期状态）
pub async fn list_businesses(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<AdminBusiness>>> {
    let repo = BusinessRepository::new(state.get_db());
    let now = shared::util::now_millis();

    let rows = repo
        .find_all()
        .await?
        .into_iter()
        .map(|b| {
            let b: shared::Business = b.into();
            let is_expired = b.is_subscription_expired(now);
            AdminBusiness {
                id: b.id,
                name: b.name,
                category: b.category,
                active: b.active,
                subscription_expires_at: b.subscription_expires_at,
                is_expired,
            }
        })
        .collect();

    Ok(Json(rows))
}

/// PUT /api/admin/businesses/:id/active - 切换商家可见性
pub async fn set_active(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(req): Json<SetActiveRequest>,
) -> AppResult<Json<shared::Business>> {
    let repo = BusinessRepository::new(state.get_db());
    let business = repo.set_active(&id, req.active).await?;

    tracing::info!(business = %id, active = req.active, "Visibility toggled by admin");
    Ok(Json(business.into()))
}

/// PUT /api/admin/config/subscription-price - 更新订阅价格
pub async fn update_subscription_price(
    State(state): State<ServerState>,
    Json(req): Json<PriceUpdateRequest>,
) -> AppResult<Json<f64>> {
    if !req.value.is_finite() || req.value < 0.0 {
        return Err(AppError::validation(
            "subscription price must be a non-negative number",
        ));
    }

    let repo = ConfigRepository::new(state.get_db());
    let value = repo.set(CONFIG_SUBSCRIPTION_PRICE, req.value).await?;

    tracing::info!(value, "Subscription price updated");
    Ok(Json(value))
}

/// Filename referenced by an image URL, if any ("/api/image/x.jpg" -> "x.jpg")
fn referenced_filename(url: &str) -> Option<&str> {
    url.rsplit('/').next().filter(|s| !s.is_empty())
}

/// POST /api/admin/images/cleanup - 清理未被引用的图片
pub async fn cleanup_images(
    State(state): State<ServerState>,
) -> AppResult<Json<CleanupReport>> {
    let business_repo = BusinessRepository::new(state.get_db());
    let promo_repo = PromotionRepository::new(state.get_db());

    let mut referenced: HashSet<String> = HashSet::new();
    for b in business_repo.find_all().await? {
        if let Some(name) = b.image_url.as_deref().and_then(referenced_filename) {
            referenced.insert(name.to_string());
        }
    }
    for p in promo_repo.find_all().await? {
        if let Some(name) = p.image_url.as_deref().and_then(referenced_filename) {
            referenced.insert(name.to_string());
        }
    }

    let report = ImageCleanupService::new(state.images_dir())
        .sweep(&referenced)
        .await;
    Ok(Json(report))
}
