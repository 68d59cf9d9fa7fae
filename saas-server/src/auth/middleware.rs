//! 认证中间件
//!
//! 为 JWT 认证和授权提供 Axum 中间件

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::{CurrentUser, JwtService};
use crate::core::ServerState;
use crate::security_log;
use crate::utils::AppError;

/// 判断是否为公共 API 路由 (无需认证)
///
/// - `/api/auth/login` 登录接口
/// - `/api/storefront/*` 店面公共接口 (菜单浏览、下单)
/// - `GET /api/blog/posts*` 营销站博客 (只读)
/// - `GET /api/pricing/packages` 营销站价格页 (只读)
fn is_public_api_route(method: &http::Method, path: &str) -> bool {
    if path == "/api/auth/login" || path.starts_with("/api/storefront/") {
        return true;
    }
    if method == http::Method::GET
        && (path.starts_with("/api/blog/posts") || path == "/api/pricing/packages")
    {
        return true;
    }
    false
}

/// 认证中间件 - 要求用户登录
///
/// 从 `Authorization: Bearer <token>` 头提取并验证 JWT。
/// 验证成功后将 [`CurrentUser`] 注入请求扩展 (`req.extensions_mut().insert(user)`)。
///
/// # 跳过认证的路径
///
/// - `OPTIONS *` (CORS 预检)
/// - 非 `/api/` 路径 (健康检查等)
/// - 公共 API 路由 (见 [`is_public_api_route`])
///
/// # 错误处理
///
/// | 错误 | HTTP 状态码 |
/// |------|------------|
/// | 无 Authorization 头 | 401 Unauthorized |
/// | 令牌过期 | 401 TokenExpired |
/// | 无效令牌 | 401 InvalidToken |
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path().to_string();

    // 允许 CORS 预检的 OPTIONS 请求 (跳过认证)
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    // 非 API 路由跳过认证 (让它们正常返回 404)
    if !path.starts_with("/api/") {
        return Ok(next.run(req).await);
    }

    // 公共 API 路由跳过认证
    if is_public_api_route(req.method(), &path) {
        return Ok(next.run(req).await);
    }

    let jwt_service = state.get_jwt_service();
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => JwtService::extract_from_header(header)
            .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?,
        None => {
            security_log!("WARN", "auth_missing", uri = format!("{:?}", req.uri()));
            return Err(AppError::unauthorized());
        }
    };

    // 验证令牌
    match jwt_service.validate_token(token) {
        Ok(claims) => {
            let user = CurrentUser::try_from(claims)
                .map_err(|e| AppError::invalid_token(format!("Malformed JWT claims: {e}")))?;
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        Err(e) => {
            security_log!(
                "WARN",
                "auth_failed",
                error = format!("{}", e),
                uri = format!("{:?}", req.uri())
            );

            match e {
                crate::auth::JwtError::ExpiredToken => Err(AppError::token_expired()),
                _ => Err(AppError::invalid_token("Invalid token")),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_routes() {
        let get = http::Method::GET;
        let post = http::Method::POST;
        assert!(is_public_api_route(&post, "/api/auth/login"));
        assert!(is_public_api_route(&post, "/api/storefront/demo/orders"));
        assert!(is_public_api_route(&get, "/api/blog/posts/hello-world"));
        assert!(is_public_api_route(&get, "/api/pricing/packages"));
        // Writes to marketing content require auth
        assert!(!is_public_api_route(&post, "/api/blog/admin/posts"));
        assert!(!is_public_api_route(&get, "/api/orders"));
    }
}
