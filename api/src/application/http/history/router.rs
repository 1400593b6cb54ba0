use axum::{
    Router, middleware,
    routing::{delete, get},
};
use utoipa::OpenApi;

use super::handlers::{
    add_history::{__path_add_history, add_history},
    clear_history::{__path_clear_history, clear_history},
    delete_history_entry::{__path_delete_history_entry, delete_history_entry},
    get_history::{__path_get_history, get_history},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(get_history, add_history, delete_history_entry, clear_history))]
pub struct HistoryApiDoc;

pub fn history_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/history", state.args.server.root_path),
            get(get_history).post(add_history).delete(clear_history),
        )
        .route(
            &format!("{}/history/{{entry_id}}", state.args.server.root_path),
            delete(delete_history_entry),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
