use axum::extract::{Path, State};
use safebite_core::domain::food::ports::FoodService;
use serde_json::Value;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/foods/{food_id}/nutrition",
    tag = "food",
    summary = "Get raw nutrition data",
    description = "Returns the provider's food.get.v2 payload unchanged",
    params(
        ("food_id" = String, Path, description = "Provider food id"),
    ),
    responses(
        (status = 200, description = "Provider payload"),
        (status = 502, description = "Nutrition provider failure")
    )
)]
pub async fn get_food_nutrition(
    Path(food_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<Value>, ApiError> {
    let nutrition = state
        .service
        .get_food_nutrition(food_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(nutrition))
}
