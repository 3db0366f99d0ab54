//! Promotion API Handlers (owner side)
//!
//! Every mutation is gated on owning the parent business. Weekday sets
//! are normalized before any write: non-empty, 0-6, deduplicated.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{Promotion, PromotionCreate, PromotionUpdate};
use crate::db::repository::{BusinessRepository, PromotionRepository, parse_id};
use crate::utils::validation::{
    MAX_DESCRIPTION_LEN, MAX_NAME_LEN, MAX_URL_LEN, normalize_days_of_week,
    validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// Make sure the caller owns the business a promotion belongs to
async fn ensure_business_owner(
    state: &ServerState,
    user: &CurrentUser,
    business_id: &str,
) -> AppResult<()> {
    let repo = BusinessRepository::new(state.get_db());
    let business = repo
        .find_by_id(business_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Business {} not found", business_id)))?;

    if business.owner.to_string() != user.id {
        return Err(AppError::forbidden("You do not own this business"));
    }

    Ok(())
}

/// Load a promotion and make sure the caller owns its parent business
async fn find_owned(
    state: &ServerState,
    user: &CurrentUser,
    id: &str,
) -> AppResult<Promotion> {
    let repo = PromotionRepository::new(state.get_db());
    let promotion = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Promotion {} not found", id)))?;

    ensure_business_owner(state, user, &promotion.business.to_string()).await?;
    Ok(promotion)
}

/// POST /api/promotions - 创建促销
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<PromotionCreate>,
) -> AppResult<Json<shared::Promotion>> {
    validate_required_text(&payload.title, "title", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_DESCRIPTION_LEN)?;
    validate_optional_text(&payload.image_url, "image_url", MAX_URL_LEN)?;
    let days = normalize_days_of_week(&payload.days_of_week)?;

    ensure_business_owner(&state, &user, &payload.business_id).await?;

    let business = parse_id("business", &payload.business_id)?;
    let repo = PromotionRepository::new(state.get_db());
    let promotion = repo
        .create(
            business,
            payload.title,
            payload.description,
            payload.image_url,
            days,
        )
        .await?;

    Ok(Json(promotion.into()))
}

/// PUT /api/promotions/:id - 更新促销
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(mut payload): Json<PromotionUpdate>,
) -> AppResult<Json<shared::Promotion>> {
    if let Some(ref title) = payload.title {
        validate_required_text(title, "title", MAX_NAME_LEN)?;
    }
    validate_optional_text(&payload.description, "description", MAX_DESCRIPTION_LEN)?;
    validate_optional_text(&payload.image_url, "image_url", MAX_URL_LEN)?;
    if let Some(ref days) = payload.days_of_week {
        payload.days_of_week = Some(normalize_days_of_week(days)?);
    }

    find_owned(&state, &user, &id).await?;

    let repo = PromotionRepository::new(state.get_db());
    let promotion = repo.update(&id, payload).await?;
    Ok(Json(promotion.into()))
}

/// DELETE /api/promotions/:id - 删除促销
pub async fn delete(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    find_owned(&state, &user, &id).await?;

    let repo = PromotionRepository::new(state.get_db());
    let result = repo.delete(&id).await?;
    tracing::info!(user_id = %user.id, promotion = %id, "Promotion deleted");
    Ok(Json(result))
}
