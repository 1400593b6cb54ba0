use safebite_core::domain::{
    common::entities::app_errors::CoreError,
    food::entities::{FoodDetails, ScanResponse},
    scan_history::entities::ScanType,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct BarcodeScanRequest {
    #[validate(length(min = 1, max = 64, message = "barcode must not be empty"))]
    #[schema(example = "0049000028911")]
    pub barcode: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct VoiceScanRequest {
    #[validate(length(max = 1000))]
    pub text: Option<String>,
    /// Base64 audio, optionally as a `data:audio/...;base64,` URL.
    pub audio_base64: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct AnalyzeFoodRequest {
    #[serde(flatten)]
    #[validate(custom(function = "validate_food_name"))]
    pub food: FoodDetails,
}

fn validate_food_name(food: &FoodDetails) -> Result<(), ValidationError> {
    if food.food_name.trim().is_empty() {
        let mut error = ValidationError::new("food_name");
        error.message = Some("food_name must not be empty".into());
        return Err(error);
    }

    Ok(())
}

/// Folds a scan result into the in-band response shape the client expects.
pub fn scan_outcome(scan_type: ScanType, result: Result<FoodDetails, CoreError>) -> ScanResponse {
    match result {
        Ok(details) => ScanResponse::found(details),
        Err(CoreError::NotFound) => ScanResponse::failed(match scan_type {
            ScanType::Barcode => "Food not found for this barcode",
            ScanType::Voice | ScanType::Image => "No food found for the given description",
        }),
        Err(CoreError::ValidationError(message)) => ScanResponse::failed(message),
        Err(e) => {
            let label = match scan_type {
                ScanType::Barcode => "Barcode",
                ScanType::Voice => "Voice",
                ScanType::Image => "Image",
            };
            ScanResponse::failed(format!("{label} scan failed: {e}"))
        }
    }
}
