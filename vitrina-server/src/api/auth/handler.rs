//! Authentication Handlers
//!
//! Handles signup, login, logout and current-user lookup.

use std::time::Duration;

use axum::{Json, extract::State};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::ProfileRepository;
use crate::utils::validation::{validate_email, validate_password};
use crate::utils::{AppError, AppResult};

use shared::client::{LoginRequest, LoginResponse, SignupRequest, UserInfo};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// POST /api/auth/signup - 注册并直接登录
///
/// 创建 profile (`is_admin = false`) 并返回令牌。
pub async fn signup(
    State(state): State<ServerState>,
    Json(req): Json<SignupRequest>,
) -> AppResult<Json<LoginResponse>> {
    validate_email(&req.email)?;
    validate_password(&req.password)?;

    let repo = ProfileRepository::new(state.get_db());
    let profile = repo.create(&req.email, &req.password).await?;

    let user_id = profile
        .id
        .as_ref()
        .map(|id| id.to_string())
        .unwrap_or_default();

    let token = state
        .get_jwt_service()
        .generate_token(&user_id, &profile.email, profile.is_admin)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    tracing::info!(user_id = %user_id, email = %profile.email, "Account created");

    Ok(Json(LoginResponse {
        token,
        user: profile.into(),
    }))
}

/// POST /api/auth/login - 邮箱密码登录
///
/// 失败时返回统一错误信息并固定延迟，防止账号枚举与计时攻击。
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let repo = ProfileRepository::new(state.get_db());
    let profile = repo.find_by_email(&req.email).await?;

    // Fixed delay before checking the result
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    let profile = match profile {
        Some(p) => {
            let password_valid = p
                .verify_password(&req.password)
                .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))?;

            if !password_valid {
                tracing::warn!(email = %req.email, "Login failed - invalid credentials");
                return Err(AppError::invalid_credentials());
            }

            p
        }
        None => {
            tracing::warn!(email = %req.email, "Login failed - account not found");
            return Err(AppError::invalid_credentials());
        }
    };

    let user_id = profile
        .id
        .as_ref()
        .map(|id| id.to_string())
        .unwrap_or_default();

    let token = state
        .get_jwt_service()
        .generate_token(&user_id, &profile.email, profile.is_admin)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    tracing::info!(user_id = %user_id, email = %profile.email, "User logged in");

    Ok(Json(LoginResponse {
        token,
        user: profile.into(),
    }))
}

/// GET /api/auth/me - 当前用户信息
///
/// 重新读取 profile，使 `is_admin` 变更即时生效。
pub async fn me(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<UserInfo>> {
    let repo = ProfileRepository::new(state.get_db());
    let profile = repo
        .find_by_id(&user.id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Profile {} not found", user.id)))?;

    Ok(Json(profile.into()))
}

/// POST /api/auth/logout - 登出
///
/// 令牌是无状态的；登出只记录事件，客户端负责丢弃令牌。
pub async fn logout(user: CurrentUser) -> AppResult<Json<()>> {
    tracing::info!(user_id = %user.id, email = %user.email, "User logged out");
    Ok(Json(()))
}
