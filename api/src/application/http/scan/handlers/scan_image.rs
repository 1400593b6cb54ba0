use axum::extract::{Multipart, State};
use safebite_core::domain::{
    food::{entities::ScanResponse, ports::FoodService, value_objects::ImageScanInput},
    scan_history::entities::ScanType,
};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        scan::validators::scan_outcome,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[utoipa::path(
    post,
    path = "/scan/image",
    tag = "scan",
    summary = "Identify a food from a photo",
    description = "`multipart/form-data` upload with the image in the `file` field (max 10 MB)",
    responses(
        (status = 200, body = ScanResponse),
        (status = 400, description = "Missing or oversized file")
    ),
    security(("bearer" = []))
)]
pub async fn scan_image(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    mut multipart: Multipart,
) -> Result<Response<ScanResponse>, ApiError> {
    let mut image_data: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read file: {}", e)))?;

        if data.len() > MAX_IMAGE_SIZE {
            return Err(ApiError::BadRequest(format!(
                "Image too large. Max size is {} bytes",
                MAX_IMAGE_SIZE
            )));
        }

        image_data = Some(data.to_vec());
    }

    let image_data =
        image_data.ok_or_else(|| ApiError::BadRequest("Missing file field".to_string()))?;

    let result = state
        .service
        .scan_image(identity, ImageScanInput { image_data })
        .await;

    Ok(Response::OK(scan_outcome(ScanType::Image, result)))
}
