//! 认证模块 - JWT + Argon2
//!
//! - [`jwt`] - JWT 令牌生成与验证
//! - [`password`] - Argon2 密码哈希
//! - [`middleware`] - 认证中间件
//! - [`extractor`] - CurrentUser 提取器

pub mod extractor;
pub mod jwt;
pub mod middleware;
pub mod password;

pub use jwt::{Claims, JwtConfig, JwtError, JwtService};
pub use middleware::require_auth;

use shared::models::UserRole;

use crate::utils::AppError;

/// 当前登录用户 - 由认证中间件注入请求扩展
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
    pub display_name: String,
    pub role: UserRole,
    /// None 表示平台管理员
    pub tenant_id: Option<i64>,
}

impl CurrentUser {
    /// 平台管理员判断
    pub fn is_platform(&self) -> bool {
        self.role == UserRole::Platform
    }

    /// 要求租户上下文 (平台管理员没有租户)
    pub fn require_tenant(&self) -> Result<i64, AppError> {
        self.tenant_id
            .ok_or_else(|| AppError::forbidden("This endpoint requires a tenant account"))
    }

    /// 要求平台管理员角色
    pub fn require_platform(&self) -> Result<(), AppError> {
        if self.is_platform() {
            Ok(())
        } else {
            Err(AppError::forbidden("Platform administrator role required"))
        }
    }
}

impl TryFrom<Claims> for CurrentUser {
    type Error = String;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        let id: i64 = claims
            .sub
            .parse()
            .map_err(|_| format!("Invalid subject: {}", claims.sub))?;
        let role: UserRole = claims.role.parse()?;
        Ok(Self {
            id,
            username: claims.username,
            display_name: claims.display_name,
            role,
            tenant_id: claims.tenant_id,
        })
    }
}
