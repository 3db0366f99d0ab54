//! Businesses API 模块 (店主)

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/businesses", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create))
        .route("/mine", get(handler::mine))
        .route("/{id}", put(handler::update).delete(handler::delete))
        .route("/{id}/promotions", get(handler::list_promotions))
}
