//! Health API Handlers

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::core::ServerState;
use crate::utils::AppResult;

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub database: &'static str,
    pub version: &'static str,
}

#[derive(Serialize)]
pub struct HealthDetail {
    pub status: &'static str,
    pub version: &'static str,
    pub environment: String,
    pub database: DatabaseHealth,
    pub timestamp: i64,
}

#[derive(Serialize)]
pub struct DatabaseHealth {
    pub status: &'static str,
    pub latency_ms: i64,
}

async fn probe_database(state: &ServerState) -> DatabaseHealth {
    let started = std::time::Instant::now();
    let status = match sqlx::query_scalar::<_, i64>("SELECT 1")
        .fetch_one(state.get_pool())
        .await
    {
        Ok(_) => "ok",
        Err(_) => "unavailable",
    };
    DatabaseHealth {
        status,
        latency_ms: started.elapsed().as_millis() as i64,
    }
}

/// GET /health - 健康检查 (无需认证)
pub async fn health(State(state): State<ServerState>) -> AppResult<Json<HealthStatus>> {
    let database = probe_database(&state).await;
    Ok(Json(HealthStatus {
        status: "ok",
        database: database.status,
        version: env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /health/detailed - 详细健康检查 (含环境与数据库延迟)
pub async fn health_detailed(State(state): State<ServerState>) -> AppResult<Json<HealthDetail>> {
    let database = probe_database(&state).await;
    Ok(Json(HealthDetail {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
        database,
        timestamp: shared::util::now_millis(),
    }))
}
