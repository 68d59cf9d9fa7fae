//! Authentication Handlers

use std::time::Duration;

use axum::{Json, extract::State};

use shared::client::{LoginRequest, LoginResponse, UserInfo};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository;
use crate::security_log;
use crate::utils::{AppError, AppResult};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// POST /api/auth/login - 登录
///
/// 验证凭据并签发 JWT。固定延迟 + 统一错误消息，防止计时攻击和用户名枚举。
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let user = repository::user::get_by_username(state.get_pool(), &req.username)
        .await
        .map_err(AppError::from)?;

    // Fixed delay before checking the result
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    let user = match user {
        Some(u) => u,
        None => {
            security_log!("WARN", "login_failed", username = req.username.clone());
            return Err(AppError::invalid_credentials());
        }
    };

    if !user.is_active {
        return Err(AppError::forbidden("Account has been disabled"));
    }

    let password_valid = crate::auth::password::verify_password(&req.password, &user.password_hash)
        .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;
    if !password_valid {
        security_log!("WARN", "login_failed", username = req.username.clone());
        return Err(AppError::invalid_credentials());
    }

    let token = state
        .get_jwt_service()
        .generate_token(&user)
        .map_err(|e| AppError::internal(format!("Token generation failed: {e}")))?;

    security_log!("INFO", "login_success", username = user.username.clone());

    Ok(Json(LoginResponse {
        token,
        user: UserInfo {
            id: user.id,
            username: user.username,
            display_name: user.display_name,
            role: user.role.as_str().to_string(),
            tenant_id: user.tenant_id,
        },
    }))
}

/// GET /api/auth/me - 当前用户信息
pub async fn me(user: CurrentUser) -> AppResult<Json<UserInfo>> {
    Ok(Json(UserInfo {
        id: user.id,
        username: user.username,
        display_name: user.display_name,
        role: user.role.as_str().to_string(),
        tenant_id: user.tenant_id,
    }))
}
