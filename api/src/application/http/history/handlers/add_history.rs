use axum::extract::State;
use safebite_core::domain::scan_history::ports::ScanHistoryService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        history::validators::AddHistoryRequest,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AddHistoryResponse {
    pub message: String,
    pub id: Uuid,
}

#[utoipa::path(
    post,
    path = "/history",
    tag = "history",
    summary = "Record a scan in the caller's history",
    responses(
        (status = 200, body = AddHistoryResponse)
    ),
    request_body = AddHistoryRequest,
    security(("bearer" = []))
)]
pub async fn add_history(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<AddHistoryRequest>,
) -> Result<Response<AddHistoryResponse>, ApiError> {
    let entry = state
        .service
        .add_history(identity, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AddHistoryResponse {
        message: "History entry added successfully".to_string(),
        id: entry.id,
    }))
}
