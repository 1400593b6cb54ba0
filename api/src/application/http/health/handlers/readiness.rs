use axum::extract::State;
use safebite_core::domain::health::{entities::DatabaseHealthStatus, ports::HealthCheckService};
use tracing::warn;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "health",
    summary = "Readiness probe",
    description = "Pings the database",
    responses(
        (status = 200, body = DatabaseHealthStatus),
        (status = 503, description = "Database unavailable")
    )
)]
pub async fn readiness(
    State(state): State<AppState>,
) -> Result<Response<DatabaseHealthStatus>, ApiError> {
    let status = state.service.readness().await.map_err(|e| {
        warn!("readiness check failed: {}", e);
        ApiError::ServiceUnavailable("Database unavailable".to_string())
    })?;

    Ok(Response::OK(status))
}
