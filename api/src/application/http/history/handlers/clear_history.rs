use axum::extract::State;
use safebite_core::domain::scan_history::ports::ScanHistoryService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClearHistoryResponse {
    pub message: String,
    pub deleted: u64,
}

#[utoipa::path(
    delete,
    path = "/history",
    tag = "history",
    summary = "Clear the caller's history",
    responses(
        (status = 200, body = ClearHistoryResponse)
    ),
    security(("bearer" = []))
)]
pub async fn clear_history(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<ClearHistoryResponse>, ApiError> {
    let deleted = state
        .service
        .clear_history(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ClearHistoryResponse {
        message: "History cleared successfully".to_string(),
        deleted,
    }))
}
