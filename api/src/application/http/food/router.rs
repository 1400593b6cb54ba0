use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    get_food_details::{__path_get_food_details, get_food_details},
    get_food_nutrition::{__path_get_food_nutrition, get_food_nutrition},
    search_foods::{__path_search_foods, search_foods},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(search_foods, get_food_details, get_food_nutrition))]
pub struct FoodApiDoc;

pub fn food_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/foods/search", state.args.server.root_path),
            get(search_foods),
        )
        .route(
            &format!("{}/foods/{{food_id}}", state.args.server.root_path),
            get(get_food_details),
        )
        .route(
            &format!("{}/foods/{{food_id}}/nutrition", state.args.server.root_path),
            get(get_food_nutrition),
        )
}
