//! Browse API 模块 (公开)

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/browse", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/businesses", get(handler::businesses))
        .route("/promotions", get(handler::promotions))
}
