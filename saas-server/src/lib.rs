//! Ladle SaaS Server - 多租户餐厅管理平台后端
//!
//! # 架构概述
//!
//! - **认证** (`auth`): JWT + Argon2 认证体系，平台/租户双层角色
//! - **数据库** (`db`): SQLite (sqlx) 存储与迁移
//! - **HTTP API** (`api`): 营销站、店面、后台三组 RESTful 接口
//! - **金额** (`money`): rust_decimal 订单金额推导
//!
//! # 模块结构
//!
//! ```text
//! saas-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # JWT 认证、权限
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 连接池、迁移、仓储
//! ├── money.rs       # 订单金额计算
//! └── utils/         # 错误、日志、校验
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod money;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState, setup_environment};
pub use utils::{AppError, AppResponse, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

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

pub fn print_banner() {
    println!(
        r#"
   __          ____    __
  / /  ___ ___/ / /__ / /__
 / /__/ _ `/ _  / / -_) __/
/____/\_,_/\_,_/_/\__/\__/
    "#
    );
}
