use std::{collections::BTreeMap, time::Duration};

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument};

use crate::{
    domain::{
        common::{FatSecretConfig, entities::app_errors::CoreError, generate_random_string},
        food::{
            entities::{FoodDetails, FoodSearchResult},
            ports::NutritionProvider,
        },
    },
    infrastructure::nutrition::{
        fatsecret_models::{BarcodeResponse, ErrorEnvelope, FoodGetResponse, SearchResponse},
        oauth::{OAUTH_VERSION, SIGNATURE_METHOD, sign_request},
    },
};

const NONCE_LENGTH: usize = 16;

#[derive(Debug, Clone)]
pub struct FatSecretClient {
    consumer_key: String,
    consumer_secret: String,
    base_url: String,
    client: Client,
}

/// Rejects FatSecret's in-band `{"error": {...}}` replies.
fn check_api_error(body: &serde_json::Value) -> Result<(), CoreError> {
    if body.get("error").is_none() {
        return Ok(());
    }

    let message = serde_json::from_value::<ErrorEnvelope>(body.clone())
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| "unknown error".to_string());
    error!("FatSecret API error: {}", message);

    Err(CoreError::ExternalServiceError(format!(
        "FatSecret API error: {}",
        message
    )))
}

fn decode<T: DeserializeOwned>(body: serde_json::Value, method: &str) -> Result<T, CoreError> {
    serde_json::from_value(body).map_err(|e| {
        error!("Unexpected FatSecret {} payload: {}", method, e);
        CoreError::ExternalServiceError(format!("Unexpected FatSecret response: {}", e))
    })
}

impl FatSecretClient {
    pub fn new(config: &FatSecretConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| {
                error!("Failed to build FatSecret HTTP client: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self {
            consumer_key: config.consumer_key.clone(),
            consumer_secret: config.consumer_secret.clone(),
            base_url: config.base_url.clone(),
            client,
        })
    }

    /// Full parameter set for one call, `oauth_signature` included.
    fn signed_params(
        &self,
        method: &str,
        params: &[(&str, String)],
        timestamp: i64,
        nonce: String,
    ) -> Result<BTreeMap<String, String>, CoreError> {
        let mut all: BTreeMap<String, String> = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();

        all.insert("oauth_consumer_key".to_string(), self.consumer_key.clone());
        all.insert("oauth_nonce".to_string(), nonce);
        all.insert("oauth_signature_method".to_string(), SIGNATURE_METHOD.to_string());
        all.insert("oauth_timestamp".to_string(), timestamp.to_string());
        all.insert("oauth_version".to_string(), OAUTH_VERSION.to_string());
        all.insert("method".to_string(), method.to_string());
        all.insert("format".to_string(), "json".to_string());

        let signature = sign_request("GET", &self.base_url, &all, &self.consumer_secret)?;
        all.insert("oauth_signature".to_string(), signature);

        Ok(all)
    }

    async fn call(
        &self,
        method: &str,
        params: &[(&str, String)],
    ) -> Result<serde_json::Value, CoreError> {
        let query = self.signed_params(
            method,
            params,
            chrono::Utc::now().timestamp(),
            generate_random_string(NONCE_LENGTH),
        )?;

        let response = self
            .client
            .get(&self.base_url)
            .query(&query)
            .send()
            .await
            .map_err(|e| {
                error!("FatSecret request {} failed: {}", method, e);
                CoreError::ExternalServiceError(format!("FatSecret API request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            error!("FatSecret {} returned {}", method, status);
            return Err(CoreError::ExternalServiceError(format!(
                "FatSecret API returned {}",
                status
            )));
        }

        let body: serde_json::Value = response.json().await.map_err(|e| {
            error!("Failed to decode FatSecret {} response: {}", method, e);
            CoreError::ExternalServiceError(format!("Invalid FatSecret response: {}", e))
        })?;

        check_api_error(&body)?;
        debug!(method, "FatSecret call succeeded");

        Ok(body)
    }
}

impl NutritionProvider for FatSecretClient {
    #[instrument(skip(self))]
    async fn search_foods(
        &self,
        query: String,
        max_results: u32,
    ) -> Result<FoodSearchResult, CoreError> {
        let body = self
            .call(
                "foods.search",
                &[
                    ("search_expression", query),
                    ("max_results", max_results.to_string()),
                    ("page_number", "0".to_string()),
                ],
            )
            .await?;

        let response: SearchResponse = decode(body, "foods.search")?;
        Ok(response.into_result(max_results))
    }

    #[instrument(skip(self))]
    async fn find_food_id_for_barcode(&self, barcode: String) -> Result<Option<String>, CoreError> {
        let body = self
            .call("food.find_id_for_barcode", &[("barcode", barcode)])
            .await?;

        let response: BarcodeResponse = decode(body, "food.find_id_for_barcode")?;
        Ok(response.into_food_id())
    }

    #[instrument(skip(self))]
    async fn get_food_details(&self, food_id: String) -> Result<FoodDetails, CoreError> {
        let body = self.call("food.get", &[("food_id", food_id)]).await?;

        let response: FoodGetResponse = decode(body, "food.get")?;
        Ok(FoodDetails::from(response.food))
    }

    async fn get_food_nutrition(&self, food_id: String) -> Result<serde_json::Value, CoreError> {
        self.call("food.get.v2", &[("food_id", food_id)]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::nutrition::oauth::signature_base_string;
    use serde_json::json;

    fn client() -> FatSecretClient {
        FatSecretClient::new(&FatSecretConfig {
            consumer_key: "demo_key".to_string(),
            consumer_secret: "demo_secret".to_string(),
            base_url: "https://platform.fatsecret.com/rest/server.api".to_string(),
            request_timeout_secs: 10,
        })
        .unwrap()
    }

    #[test]
    fn test_signed_params_carry_oauth_fields() {
        let params = client()
            .signed_params(
                "foods.search",
                &[
                    ("search_expression", "peanut butter & jelly".to_string()),
                    ("max_results", "10".to_string()),
                    ("page_number", "0".to_string()),
                ],
                1_700_000_000,
                "abc123".to_string(),
            )
            .unwrap();

        assert_eq!(params["method"], "foods.search");
        assert_eq!(params["format"], "json");
        assert_eq!(params["oauth_consumer_key"], "demo_key");
        assert_eq!(params["oauth_signature_method"], "HMAC-SHA1");
        assert_eq!(params["oauth_version"], "1.0");
        assert_eq!(params["oauth_signature"], "tNsGOxSJIxNjDaEROhdXN04mE4w=");
    }

    #[test]
    fn test_signature_excludes_itself() {
        let mut params = client()
            .signed_params("food.get", &[("food_id", "1".to_string())], 1, "n".to_string())
            .unwrap();
        let signature = params.remove("oauth_signature").unwrap();

        let base = signature_base_string("GET", "https://platform.fatsecret.com/rest/server.api", &params);
        assert!(!base.contains("oauth_signature%3D"));
        assert_eq!(
            sign_request("GET", "https://platform.fatsecret.com/rest/server.api", &params, "demo_secret")
                .unwrap(),
            signature
        );
    }

    #[test]
    fn test_in_band_error_is_rejected() {
        let body = json!({"error": {"code": 8, "message": "Invalid signature"}});

        assert_eq!(
            check_api_error(&body),
            Err(CoreError::ExternalServiceError(
                "FatSecret API error: Invalid signature".to_string()
            ))
        );
        assert_eq!(check_api_error(&json!({"food": {}})), Ok(()));
    }
}
