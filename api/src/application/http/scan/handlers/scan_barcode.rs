use axum::extract::State;
use safebite_core::domain::{
    food::{entities::ScanResponse, ports::FoodService, value_objects::BarcodeScanInput},
    scan_history::entities::ScanType,
};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        scan::validators::{BarcodeScanRequest, scan_outcome},
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
    path = "/scan/barcode",
    tag = "scan",
    summary = "Identify a food from its barcode",
    description = "Failures are reported with success = false",
    responses(
        (status = 200, body = ScanResponse)
    ),
    request_body = BarcodeScanRequest,
    security(("bearer" = []))
)]
pub async fn scan_barcode(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<BarcodeScanRequest>,
) -> Result<Response<ScanResponse>, ApiError> {
    let result = state
        .service
        .scan_barcode(
            identity,
            BarcodeScanInput {
                barcode: payload.barcode,
            },
        )
        .await;

    Ok(Response::OK(scan_outcome(ScanType::Barcode, result)))
}
