use axum::extract::State;
use safebite_core::domain::scan_history::{entities::HistoryItem, ports::ScanHistoryService};

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/history",
    tag = "history",
    summary = "List the caller's scan history",
    description = "Entries are returned newest first",
    responses(
        (status = 200, body = Vec<HistoryItem>)
    ),
    security(("bearer" = []))
)]
pub async fn get_history(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<Vec<HistoryItem>>, ApiError> {
    let history = state
        .service
        .get_history(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(history))
}
