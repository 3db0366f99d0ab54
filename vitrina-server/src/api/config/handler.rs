//! Config Handlers

use axum::{Json, extract::State};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::models::CONFIG_SUBSCRIPTION_PRICE;
use crate::db::repository::ConfigRepository;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Serialize)]
pub struct PriceResponse {
    pub value: f64,
}

/// GET /api/config/subscription-price - 当前月度订阅价格
pub async fn subscription_price(
    State(state): State<ServerState>,
) -> AppResult<Json<PriceResponse>> {
    let repo = ConfigRepository::new(state.get_db());
    let value = repo
        .get(CONFIG_SUBSCRIPTION_PRICE)
        .await?
        .ok_or_else(|| AppError::not_found("subscription_price is not configured"))?;

    Ok(Json(PriceResponse { value }))
}
