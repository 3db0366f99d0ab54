//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`auth`] - 认证相关接口
//! - [`browse`] - 公开浏览接口 (无需登录)
//! - [`businesses`] - 商家管理接口 (店主)
//! - [`promotions`] - 促销管理接口 (店主)
//! - [`config`] - 订阅价格读取
//! - [`upload`] - 图片上传与读取
//! - [`admin`] - 审核与定价接口 (管理员)

pub mod admin;
pub mod auth;
pub mod browse;
pub mod businesses;
pub mod config;
pub mod health;
pub mod promotions;
pub mod upload;

use axum::Router;

use crate::core::ServerState;

/// Assemble every API route group
pub fn router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(browse::router())
        .merge(businesses::router())
        .merge(promotions::router())
        .merge(config::router())
        .merge(upload::router())
        .merge(admin::router())
}
