use axum::extract::State;
use safebite_core::domain::allergen_analysis::{
    entities::AnalysisReport, ports::AllergenAnalysisService, value_objects::AnalyzeAllergensInput,
};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        scan::validators::AnalyzeFoodRequest,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    post,
    path = "/scan/analyze",
    tag = "scan",
    summary = "Analyze a food against the caller's allergen profile",
    description = "Runs the LLM analysis and adds the deterministic risk score and a confidence label",
    responses(
        (status = 200, body = AnalysisReport),
        (status = 502, description = "LLM failure")
    ),
    request_body = AnalyzeFoodRequest,
    security(("bearer" = []))
)]
pub async fn analyze_food(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<AnalyzeFoodRequest>,
) -> Result<Response<AnalysisReport>, ApiError> {
    let report = state
        .service
        .analyze_food_allergens(identity, AnalyzeAllergensInput { food: payload.food })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(report))
}
