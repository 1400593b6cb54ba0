use axum::extract::{Path, State};
use safebite_core::domain::scan_history::ports::ScanHistoryService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DeleteHistoryEntryResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/history/{entry_id}",
    tag = "history",
    summary = "Delete one history entry",
    params(
        ("entry_id" = Uuid, Path, description = "History entry id"),
    ),
    responses(
        (status = 200, body = DeleteHistoryEntryResponse),
        (status = 403, description = "Entry belongs to another user"),
        (status = 404, description = "History entry not found")
    ),
    security(("bearer" = []))
)]
pub async fn delete_history_entry(
    Path(entry_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<DeleteHistoryEntryResponse>, ApiError> {
    state
        .service
        .delete_history_entry(identity, entry_id)
        .await
        .map_err(|e| match ApiError::from(e) {
            ApiError::NotFound(_) => ApiError::NotFound("History entry not found".to_string()),
            other => other,
        })?;

    Ok(Response::OK(DeleteHistoryEntryResponse {
        message: "History entry deleted successfully".to_string(),
    }))
}
