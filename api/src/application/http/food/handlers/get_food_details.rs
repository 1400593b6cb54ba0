use axum::extract::{Path, State};
use safebite_core::domain::food::{entities::FoodDetails, ports::FoodService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/foods/{food_id}",
    tag = "food",
    summary = "Get food details",
    description = "Provider record reshaped: the first serving becomes the nutrition block and ingredients are split on commas",
    params(
        ("food_id" = String, Path, description = "Provider food id"),
    ),
    responses(
        (status = 200, body = FoodDetails),
        (status = 502, description = "Nutrition provider failure")
    )
)]
pub async fn get_food_details(
    Path(food_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<FoodDetails>, ApiError> {
    let details = state
        .service
        .get_food_details(food_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(details))
}
