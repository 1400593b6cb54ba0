use axum::{Router, middleware, routing::post};
use utoipa::OpenApi;

use super::handlers::{
    login::{__path_login, login},
    logout::{__path_logout, logout},
    register::{__path_register, register},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(register, login, logout))]
pub struct AuthenticationApiDoc;

pub fn authentication_routes(state: AppState) -> Router<AppState> {
    let root_path = state.args.server.root_path.clone();

    let protected = Router::new()
        .route(&format!("{}/logout", root_path), post(logout))
        .layer(middleware::from_fn_with_state(state.clone(), auth));

    Router::new()
        .route(&format!("{}/register", root_path), post(register))
        .route(&format!("{}/login", root_path), post(login))
        .merge(protected)
}
