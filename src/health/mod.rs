/*!
 * # Health Check Module
 *
 * - Basic health check (`/health`) - status, uptime and number of stored products
 * - Version info (`/health/version`)
 */

use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::{Duration, SystemTime};
use tracing::debug;

use crate::AppState;

/// Basic health status
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Up,
}

/// Overall health information
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HealthInfo {
    pub status: HealthStatus,
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub uptime_seconds: u64,
    pub product_count: usize,
}

/// Seconds elapsed since `start_time`
pub fn uptime(start_time: SystemTime) -> u64 {
    SystemTime::now()
        .duration_since(start_time)
        .unwrap_or(Duration::from_secs(0))
        .as_secs()
}

/// Returns build and version information
pub async fn version_info() -> impl IntoResponse {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Basic health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthInfo> {
    debug!("Health check endpoint called");

    // Storage is in-process, so the service is up whenever it can answer
    Json(HealthInfo {
        status: HealthStatus::Up,
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        uptime_seconds: uptime(state.started_at),
        product_count: state.product_service.product_count().await,
    })
}

pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health_check))
        .route("/version", get(version_info))
}
