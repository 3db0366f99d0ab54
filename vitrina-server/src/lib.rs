//! Vitrina Server - 本地商家目录服务
//!
//! # 架构概述
//!
//! 本模块是服务端主入口，提供以下核心功能：
//!
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储
//! - **认证** (`auth`): JWT + Argon2 认证体系
//! - **浏览** (`browse`): 公开列表的条件过滤引擎
//! - **媒体** (`media`): 图片裁剪管线
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! vitrina-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # JWT 认证、中间件
//! ├── api/           # HTTP 路由和处理器
//! ├── browse/        # 过滤引擎、公开视图
//! ├── media/         # 图片裁剪
//! ├── services/      # 孤儿图片清理
//! ├── db/            # 数据库层
//! └── utils/         # 工具函数
//! ```

pub mod api;
pub mod auth;
pub mod browse;
pub mod core;
pub mod db;
pub mod media;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResponse, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// 设置运行环境 (dotenv, 日志)
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    init_logger();
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
 _    ___ __       _
| |  / (_) /______(_)___  ____ _
| | / / / __/ ___/ / __ \/ __ `/
| |/ / / /_/ /  / / / / / /_/ /
|___/_/\__/_/  /_/_/ /_/\__,_/
    "#
    );
}
