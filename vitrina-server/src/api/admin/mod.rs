//! Admin API 模块
//!
//! 审核（可见性开关）、订阅定价与孤儿图片清理。
//! 所有路由都要求 `is_admin`。

mod handler;

use axum::{Router, middleware, routing::get, routing::post, routing::put};

use crate::auth::middleware::require_admin;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/admin", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/businesses", get(handler::list_businesses))
        .route("/businesses/{id}/active", put(handler::set_active))
        .route(
            "/config/subscription-price",
            put(handler::update_subscription_price),
        )
        .route("/images/cleanup", post(handler::cleanup_images))
        .layer(middleware::from_fn(require_admin))
}
