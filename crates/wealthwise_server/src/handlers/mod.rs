pub mod goal_handlers;
pub mod portfolio_handlers;

pub use goal_handlers::*;
pub use portfolio_handlers::*;

use axum::Json;

use crate::models::{ApiResponse, HealthStatus};

pub async fn health_check() -> Json<ApiResponse<HealthStatus>> {
    Json(ApiResponse::ok(HealthStatus {
        status: "healthy",
        timestamp: jiff::Timestamp::now().to_string(),
    }))
}
