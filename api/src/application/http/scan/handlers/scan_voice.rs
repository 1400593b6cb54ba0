use axum::extract::State;
use safebite_core::domain::{
    food::{entities::ScanResponse, ports::FoodService, value_objects::VoiceScanInput},
    scan_history::entities::ScanType,
};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        scan::validators::{VoiceScanRequest, scan_outcome},
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    post,
    path = "/scan/voice",
    tag = "scan",
    summary = "Identify a food from a spoken description",
    description = "Uses `text` when present, otherwise the transcribed `audio_base64`. The first search hit is returned.",
    responses(
        (status = 200, body = ScanResponse)
    ),
    request_body = VoiceScanRequest,
    security(("bearer" = []))
)]
pub async fn scan_voice(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<VoiceScanRequest>,
) -> Result<Response<ScanResponse>, ApiError> {
    let result = state
        .service
        .scan_voice(
            identity,
            VoiceScanInput {
                text: payload.text,
                audio_base64: payload.audio_base64,
            },
        )
        .await;

    Ok(Response::OK(scan_outcome(ScanType::Voice, result)))
}
