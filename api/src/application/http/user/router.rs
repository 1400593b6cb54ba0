use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    get_allergens::{__path_get_allergens, get_allergens},
    get_profile::{__path_get_profile, get_profile},
    update_allergens::{__path_update_allergens, update_allergens},
    update_profile::{__path_update_profile, update_profile},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(get_profile, update_profile, get_allergens, update_allergens))]
pub struct UserApiDoc;

pub fn user_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/profile", state.args.server.root_path),
            get(get_profile).put(update_profile),
        )
        .route(
            &format!("{}/allergens", state.args.server.root_path),
            get(get_allergens).put(update_allergens),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
