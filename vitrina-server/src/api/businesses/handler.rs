//! Business API Handlers (owner side)
//!
//! Creation doubles as the simulated payment. There is no gateway
//! integration; the paid effect is applied directly and the listing
//! comes to life active with a 30-day visibility window.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{Business, BusinessCreate, BusinessUpdate};
use crate::db::repository::{BusinessRepository, PromotionRepository, parse_id};
use crate::utils::validation::{
    MAX_DESCRIPTION_LEN, MAX_NAME_LEN, MAX_PHONE_LEN, MAX_URL_LEN, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// Paid visibility window granted by the simulated payment
const SUBSCRIPTION_DAYS: i64 = 30;

fn validate_payload_texts(
    name: Option<&String>,
    description: &Option<String>,
    phone: &Option<String>,
    image_url: &Option<String>,
) -> Result<(), AppError> {
    if let Some(name) = name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    validate_optional_text(description, "description", MAX_DESCRIPTION_LEN)?;
    validate_optional_text(phone, "phone", MAX_PHONE_LEN)?;
    validate_optional_text(image_url, "image_url", MAX_URL_LEN)?;
    Ok(())
}

/// Load a business and make sure the caller owns it
async fn find_owned(
    repo: &BusinessRepository,
    user: &CurrentUser,
    id: &str,
) -> AppResult<Business> {
    let business = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Business {} not found", id)))?;

    if business.owner.to_string() != user.id {
        return Err(AppError::forbidden("You do not own this business"));
    }

    Ok(business)
}

/// GET /api/businesses/mine - 当前店主的商家列表
pub async fn mine(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<shared::Business>>> {
    let owner = parse_id("profile", &user.id)?;
    let repo = BusinessRepository::new(state.get_db());
    let businesses = repo.find_by_owner(&owner).await?;
    Ok(Json(businesses.into_iter().map(|b| b.into()).collect()))
}

/// POST /api/businesses - 模拟支付并创建商家
///
/// 校验通过后直接写入支付效果：`active = true`，
/// `subscription_expires_at = now + 30 天`。
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<BusinessCreate>,
) -> AppResult<Json<shared::Business>> {
    validate_payload_texts(
        Some(&payload.name),
        &payload.description,
        &payload.phone,
        &payload.image_url,
    )?;

    let owner = parse_id("profile", &user.id)?;
    let now = shared::util::now_millis();
    let expires_at = now + SUBSCRIPTION_DAYS * 24 * 60 * 60 * 1000;

    let repo = BusinessRepository::new(state.get_db());
    let business = repo
        .create(owner, payload, true, Some(expires_at))
        .await?;

    tracing::info!(
        user_id = %user.id,
        business = %business.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
        expires_at,
        "Payment simulated, business activated for {} days",
        SUBSCRIPTION_DAYS
    );

    Ok(Json(business.into()))
}

/// PUT /api/businesses/:id - 店主更新商家资料
///
/// 仅限资料字段；`active` 与订阅到期时间不可经此修改。
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(payload): Json<BusinessUpdate>,
) -> AppResult<Json<shared::Business>> {
    validate_payload_texts(
        payload.name.as_ref(),
        &payload.description,
        &payload.phone,
        &payload.image_url,
    )?;

    let repo = BusinessRepository::new(state.get_db());
    find_owned(&repo, &user, &id).await?;

    let business = repo.update(&id, payload).await?;
    Ok(Json(business.into()))
}

/// DELETE /api/businesses/:id - 店主删除商家（连同促销）
pub async fn delete(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = BusinessRepository::new(state.get_db());
    find_owned(&repo, &user, &id).await?;

    let result = repo.delete(&id).await?;
    tracing::info!(user_id = %user.id, business = %id, "Business deleted");
    Ok(Json(result))
}

/// GET /api/businesses/:id/promotions - 店主查看某商家的促销
pub async fn list_promotions(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<shared::Promotion>>> {
    let repo = BusinessRepository::new(state.get_db());
    let business = find_owned(&repo, &user, &id).await?;

    let business_id = business
        .id
        .ok_or_else(|| AppError::internal("Business row has no id"))?;

    let promo_repo = PromotionRepository::new(state.get_db());
    let promotions = promo_repo.find_by_business(&business_id).await?;
    Ok(Json(promotions.into_iter().map(|p| p.into()).collect()))
}
