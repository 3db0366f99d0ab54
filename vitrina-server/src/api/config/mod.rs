//! Config API 模块
//!
//! 订阅价格读取（店主填写新商家时展示）。写入在 admin 模块。

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route(
        "/api/config/subscription-price",
        get(handler::subscription_price),
    )
}
