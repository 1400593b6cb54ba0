use std::future::Future;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    food::{
        entities::{FoodDetails, FoodSearchResult},
        value_objects::{BarcodeScanInput, ImageScanInput, SearchFoodsInput, VoiceScanInput},
    },
};

/// Third-party nutrition database.
#[cfg_attr(test, mockall::automock)]
pub trait NutritionProvider: Send + Sync {
    fn search_foods(
        &self,
        query: String,
        max_results: u32,
    ) -> impl Future<Output = Result<FoodSearchResult, CoreError>> + Send;

    /// `None` when the barcode is unknown to the provider.
    fn find_food_id_for_barcode(
        &self,
        barcode: String,
    ) -> impl Future<Output = Result<Option<String>, CoreError>> + Send;

    fn get_food_details(
        &self,
        food_id: String,
    ) -> impl Future<Output = Result<FoodDetails, CoreError>> + Send;

    /// Provider payload passed through untouched.
    fn get_food_nutrition(
        &self,
        food_id: String,
    ) -> impl Future<Output = Result<serde_json::Value, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait FoodService: Send + Sync {
    fn search_foods(
        &self,
        input: SearchFoodsInput,
    ) -> impl Future<Output = Result<FoodSearchResult, CoreError>> + Send;

    fn get_food_details(
        &self,
        food_id: String,
    ) -> impl Future<Output = Result<FoodDetails, CoreError>> + Send;

    fn get_food_nutrition(
        &self,
        food_id: String,
    ) -> impl Future<Output = Result<serde_json::Value, CoreError>> + Send;

    fn scan_barcode(
        &self,
        identity: Identity,
        input: BarcodeScanInput,
    ) -> impl Future<Output = Result<FoodDetails, CoreError>> + Send;

    fn scan_voice(
        &self,
        identity: Identity,
        input: VoiceScanInput,
    ) -> impl Future<Output = Result<FoodDetails, CoreError>> + Send;

    fn scan_image(
        &self,
        identity: Identity,
        input: ImageScanInput,
    ) -> impl Future<Output = Result<FoodDetails, CoreError>> + Send;
}
