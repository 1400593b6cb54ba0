use serde::{Deserialize, Deserializer};

use crate::domain::food::{
    entities::{FoodDetails, FoodItem, FoodSearchResult, NutritionInfo},
    helpers::split_ingredients,
};

/// FatSecret collapses single-element arrays into a bare object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        OneOrMany::Many(Vec::new())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    String(String),
}

/// Numeric fields arrive as JSON strings ("12.50"); numbers are accepted too.
fn de_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NumberOrString>::deserialize(deserializer)?;

    Ok(match value {
        Some(NumberOrString::Number(n)) => Some(n),
        Some(NumberOrString::String(s)) => s.trim().parse().ok(),
        None => None,
    })
}

fn de_opt_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(de_opt_f64(deserializer)?.filter(|n| *n >= 0.0).map(|n| n as u64))
}

fn de_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => format!("{}", n as u64),
        NumberOrString::String(s) => s,
    })
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ApiError,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub foods: Option<SearchFoods>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchFoods {
    #[serde(default)]
    pub food: OneOrMany<FoodHit>,
    #[serde(default, deserialize_with = "de_opt_u64")]
    pub max_results: Option<u64>,
    #[serde(default, deserialize_with = "de_opt_u64")]
    pub page_number: Option<u64>,
    #[serde(default, deserialize_with = "de_opt_u64")]
    pub total_results: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FoodHit {
    #[serde(deserialize_with = "de_id")]
    pub food_id: String,
    #[serde(default)]
    pub food_name: String,
    pub brand_name: Option<String>,
    pub food_type: Option<String>,
    pub food_url: Option<String>,
    pub food_description: Option<String>,
}

impl From<FoodHit> for FoodItem {
    fn from(hit: FoodHit) -> Self {
        Self {
            food_id: hit.food_id,
            food_name: hit.food_name,
            brand_name: hit.brand_name,
            food_type: hit.food_type,
            food_url: hit.food_url,
            food_description: hit.food_description,
        }
    }
}

impl SearchResponse {
    pub fn into_result(self, requested_max: u32) -> FoodSearchResult {
        let Some(foods) = self.foods else {
            return FoodSearchResult {
                max_results: requested_max,
                ..Default::default()
            };
        };

        let items: Vec<FoodItem> = foods.food.into_vec().into_iter().map(FoodItem::from).collect();

        FoodSearchResult {
            total_results: foods
                .total_results
                .map(|n| n as usize)
                .unwrap_or(items.len()),
            page_number: foods.page_number.unwrap_or(0) as u32,
            max_results: foods.max_results.map(|n| n as u32).unwrap_or(requested_max),
            foods: items,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FoodGetResponse {
    pub food: FoodRecord,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FoodRecord {
    #[serde(deserialize_with = "de_id")]
    pub food_id: String,
    #[serde(default)]
    pub food_name: String,
    pub brand_name: Option<String>,
    pub food_type: Option<String>,
    pub food_url: Option<String>,
    pub food_description: Option<String>,
    pub ingredients: Option<String>,
    #[serde(default)]
    pub servings: Option<Servings>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Servings {
    #[serde(default)]
    pub serving: OneOrMany<Serving>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Serving {
    pub serving_description: Option<String>,
    pub metric_serving_amount: Option<String>,
    pub metric_serving_unit: Option<String>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub calories: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub protein: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub carbohydrate: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub fat: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub fiber: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub sugar: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub sodium: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub cholesterol: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub saturated_fat: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub trans_fat: Option<f64>,
}

impl From<Serving> for NutritionInfo {
    fn from(serving: Serving) -> Self {
        Self {
            calories: serving.calories,
            protein: serving.protein,
            carbohydrates: serving.carbohydrate,
            fat: serving.fat,
            fiber: serving.fiber,
            sugar: serving.sugar,
            sodium: serving.sodium,
            cholesterol: serving.cholesterol,
            saturated_fat: serving.saturated_fat,
            trans_fat: serving.trans_fat,
            serving_size: serving.metric_serving_amount.or(serving.serving_description),
            serving_unit: serving.metric_serving_unit,
        }
    }
}

impl From<FoodRecord> for FoodDetails {
    fn from(record: FoodRecord) -> Self {
        let nutrition = record
            .servings
            .and_then(|s| s.serving.into_vec().into_iter().next())
            .map(NutritionInfo::from)
            .filter(|n| !n.is_empty());

        let ingredients = record
            .ingredients
            .as_deref()
            .map(split_ingredients)
            .filter(|i| !i.is_empty());

        Self {
            food_id: record.food_id,
            food_name: record.food_name,
            brand_name: record.brand_name,
            food_type: record.food_type,
            food_url: record.food_url,
            food_description: record.food_description,
            ingredients,
            nutrition,
            allergens: None,
            barcode: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BarcodeResponse {
    pub food_id: BarcodeFoodId,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BarcodeFoodId {
    Wrapped {
        #[serde(deserialize_with = "de_id")]
        value: String,
    },
    Bare(#[serde(deserialize_with = "de_id")] String),
}

impl BarcodeResponse {
    /// FatSecret answers an unknown barcode with id `0`.
    pub fn into_food_id(self) -> Option<String> {
        let id = match self.food_id {
            BarcodeFoodId::Wrapped { value } => value,
            BarcodeFoodId::Bare(value) => value,
        };

        let id = id.trim().to_string();
        (!id.is_empty() && id != "0").then_some(id)
    }
}
