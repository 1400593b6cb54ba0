use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One hit of a food search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodItem {
    pub food_id: String,
    pub food_name: String,
    pub brand_name: Option<String>,
    pub food_type: Option<String>,
    pub food_url: Option<String>,
    pub food_description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodSearchResult {
    pub foods: Vec<FoodItem>,
    pub total_results: usize,
    pub page_number: u32,
    pub max_results: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbohydrates: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sugar: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sodium: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cholesterol: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saturated_fat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trans_fat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serving_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serving_unit: Option<String>,
}

impl NutritionInfo {
    pub fn is_empty(&self) -> bool {
        *self == NutritionInfo::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodDetails {
    pub food_id: String,
    pub food_name: String,
    pub brand_name: Option<String>,
    pub food_type: Option<String>,
    pub food_url: Option<String>,
    pub food_description: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub nutrition: Option<NutritionInfo>,
    pub allergens: Option<Vec<String>>,
    pub barcode: Option<String>,
}

/// Outcome of a barcode, voice or image scan. Failures are reported in-band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScanResponse {
    pub success: bool,
    pub food_details: Option<FoodDetails>,
    pub error_message: Option<String>,
}

impl ScanResponse {
    pub fn found(food_details: FoodDetails) -> Self {
        Self {
            success: true,
            food_details: Some(food_details),
            error_message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            food_details: None,
            error_message: Some(message.into()),
        }
    }
}
