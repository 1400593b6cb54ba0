use axum::extract::State;
use safebite_core::domain::food::{
    entities::FoodSearchResult, ports::FoodService, value_objects::SearchFoodsInput,
};

use crate::application::http::{
    food::validators::SearchFoodsParams,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateQuery},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/foods/search",
    tag = "food",
    summary = "Search foods by name",
    params(SearchFoodsParams),
    responses(
        (status = 200, body = FoodSearchResult),
        (status = 400, description = "Invalid query parameters"),
        (status = 502, description = "Nutrition provider failure")
    )
)]
pub async fn search_foods(
    State(state): State<AppState>,
    ValidateQuery(params): ValidateQuery<SearchFoodsParams>,
) -> Result<Response<FoodSearchResult>, ApiError> {
    let result = state
        .service
        .search_foods(SearchFoodsInput {
            query: params.query,
            max_results: params.max_results,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(result))
}
