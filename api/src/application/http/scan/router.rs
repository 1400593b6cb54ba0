use axum::{Router, extract::DefaultBodyLimit, middleware, routing::post};
use utoipa::OpenApi;

use super::handlers::{
    analyze_food::{__path_analyze_food, analyze_food},
    scan_barcode::{__path_scan_barcode, scan_barcode},
    scan_image::{__path_scan_image, MAX_IMAGE_SIZE, scan_image},
    scan_voice::{__path_scan_voice, scan_voice},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(scan_barcode, scan_voice, scan_image, analyze_food))]
pub struct ScanApiDoc;

pub fn scan_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/scan/barcode", state.args.server.root_path),
            post(scan_barcode),
        )
        .route(
            &format!("{}/scan/voice", state.args.server.root_path),
            post(scan_voice),
        )
        .route(
            &format!("{}/scan/image", state.args.server.root_path),
            post(scan_image).layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE + 64 * 1024)),
        )
        .route(
            &format!("{}/scan/analyze", state.args.server.root_path),
            post(analyze_food),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
