use sha2::{Digest, Sha256};
use tracing::{debug, instrument};

use crate::domain::{
    allergen_analysis::ports::LLMClient,
    allergen_profile::ports::AllergenProfileRepository,
    authentication::{ports::TokenIssuer, value_objects::Identity},
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    food::{
        entities::{FoodDetails, FoodSearchResult, NutritionInfo},
        helpers::{
            decode_base64_audio, detect_image_format, extract_barcode_from_text,
            normalize_barcode, sanitize_food_name, validate_barcode,
        },
        ports::{FoodService, NutritionProvider},
        value_objects::{BarcodeScanInput, ImageScanInput, SearchFoodsInput, VoiceScanInput},
    },
    health::ports::HealthCheckRepository,
    scan_history::ports::ScanHistoryRepository,
    user::ports::UserRepository,
};

pub const MAX_SEARCH_RESULTS: u32 = 50;

/// Stands in for speech-to-text until a transcription backend is wired in.
const SIMULATED_TRANSCRIPTION: &str = "chicken sandwich";

/// Fixed identification returned for uploaded images.
fn simulated_image_identification(image_data: &[u8]) -> FoodDetails {
    let digest = hex::encode(Sha256::digest(image_data));

    FoodDetails {
        food_id: format!("image_{}", &digest[..16]),
        food_name: "Sample Food Item".to_string(),
        ingredients: Some(
            ["wheat flour", "eggs", "milk", "sugar"]
                .into_iter()
                .map(str::to_string)
                .collect(),
        ),
        nutrition: Some(NutritionInfo {
            calories: Some(250.0),
            protein: Some(8.5),
            carbohydrates: Some(35.2),
            fat: Some(9.1),
            ..Default::default()
        }),
        ..Default::default()
    }
}

impl<U, AP, SH, HC, H, T, N, LLM> Service<U, AP, SH, HC, H, T, N, LLM>
where
    N: NutritionProvider,
{
    async fn lookup_barcode(&self, barcode: &str) -> Result<FoodDetails, CoreError> {
        if !validate_barcode(barcode) {
            return Err(CoreError::ValidationError(
                "Barcode must contain 8 to 14 digits".to_string(),
            ));
        }
        let barcode = normalize_barcode(barcode);

        let food_id = self
            .nutrition_provider
            .find_food_id_for_barcode(barcode.clone())
            .await?
            .ok_or(CoreError::NotFound)?;

        let mut details = self.nutrition_provider.get_food_details(food_id).await?;
        details.barcode = Some(barcode);

        Ok(details)
    }
}

impl<U, AP, SH, HC, H, T, N, LLM> FoodService for Service<U, AP, SH, HC, H, T, N, LLM>
where
    U: UserRepository,
    AP: AllergenProfileRepository,
    SH: ScanHistoryRepository,
    HC: HealthCheckRepository,
    H: HasherRepository,
    T: TokenIssuer,
    N: NutritionProvider,
    LLM: LLMClient,
{
    async fn search_foods(&self, input: SearchFoodsInput) -> Result<FoodSearchResult, CoreError> {
        let query = input.query.trim();
        if query.is_empty() {
            return Err(CoreError::ValidationError("query must not be empty".to_string()));
        }
        if !(1..=MAX_SEARCH_RESULTS).contains(&input.max_results) {
            return Err(CoreError::ValidationError(format!(
                "max_results must be between 1 and {MAX_SEARCH_RESULTS}"
            )));
        }

        self.nutrition_provider
            .search_foods(query.to_string(), input.max_results)
            .await
    }

    async fn get_food_details(&self, food_id: String) -> Result<FoodDetails, CoreError> {
        self.nutrition_provider.get_food_details(food_id).await
    }

    async fn get_food_nutrition(&self, food_id: String) -> Result<serde_json::Value, CoreError> {
        self.nutrition_provider.get_food_nutrition(food_id).await
    }

    #[instrument(skip(self, input), fields(user_id = %identity.user_id))]
    async fn scan_barcode(
        &self,
        identity: Identity,
        input: BarcodeScanInput,
    ) -> Result<FoodDetails, CoreError> {
        self.lookup_barcode(&input.barcode).await
    }

    #[instrument(skip(self, input), fields(user_id = %identity.user_id))]
    async fn scan_voice(
        &self,
        identity: Identity,
        input: VoiceScanInput,
    ) -> Result<FoodDetails, CoreError> {
        let text = match (input.text, input.audio_base64) {
            (Some(text), _) if !text.trim().is_empty() => text,
            (_, Some(audio)) if !audio.trim().is_empty() => {
                let audio = decode_base64_audio(&audio)?;
                debug!(bytes = audio.len(), "transcribing voice input");
                SIMULATED_TRANSCRIPTION.to_string()
            }
            _ => {
                return Err(CoreError::ValidationError(
                    "No text or audio provided".to_string(),
                ));
            }
        };

        // A spoken barcode number goes straight to the barcode lookup.
        if let Some(barcode) = extract_barcode_from_text(&text) {
            return self.lookup_barcode(&barcode).await;
        }

        let query = sanitize_food_name(&text);
        let result = self.nutrition_provider.search_foods(query, 1).await?;
        let first = result.foods.into_iter().next().ok_or(CoreError::NotFound)?;

        self.nutrition_provider.get_food_details(first.food_id).await
    }

    #[instrument(skip(self, input), fields(user_id = %identity.user_id, bytes = input.image_data.len()))]
    async fn scan_image(
        &self,
        identity: Identity,
        input: ImageScanInput,
    ) -> Result<FoodDetails, CoreError> {
        let format = detect_image_format(&input.image_data).ok_or_else(|| {
            CoreError::ValidationError("Uploaded file is not a supported image".to_string())
        })?;
        debug!(format, "image accepted");

        Ok(simulated_image_identification(&input.image_data))
    }
}
