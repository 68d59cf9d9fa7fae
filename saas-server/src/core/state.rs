use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;

/// 服务器状态 - 持有所有服务的单例引用
///
/// ServerState 是应用的核心数据结构，持有所有服务的共享引用。
/// 使用 Arc / 连接池实现浅拷贝，克隆成本极低。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | pool | SqlitePool | SQLite 连接池 |
/// | jwt_service | Arc<JwtService> | JWT 认证服务 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// SQLite 连接池
    pub pool: SqlitePool,
    /// JWT 认证服务 (Arc 共享所有权)
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`ServerState::initialize`] 代替
    pub fn new(config: Config, pool: SqlitePool, jwt_service: Arc<JwtService>) -> Self {
        Self {
            config,
            pool,
            jwt_service,
        }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构 (确保目录存在)
    /// 2. 数据库 (work_dir/database/ladle.db, 自动迁移)
    /// 3. JWT 服务
    /// 4. 开发环境演示数据
    pub async fn initialize(config: &Config) -> anyhow::Result<Self> {
        // 0. Ensure work_dir structure exists
        config.ensure_work_dir_structure()?;

        // 1. Initialize DB
        let db_path = config.database_dir().join("ladle.db");
        let db_service = DbService::new(&db_path.to_string_lossy()).await?;

        // 2. Initialize JWT service
        let jwt_service = Arc::new(JwtService::new(config.jwt.clone()));

        let state = Self::new(config.clone(), db_service.pool, jwt_service);

        // 3. Seed demo data on first boot in development
        if config.is_development() {
            crate::db::seed::seed_if_empty(&state.pool).await?;
        }

        Ok(state)
    }

    /// 获取数据库连接池
    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// 获取 JWT 服务
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }
}
