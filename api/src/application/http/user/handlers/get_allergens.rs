use axum::extract::State;
use safebite_core::domain::allergen_profile::{
    entities::AllergenProfile, ports::AllergenProfileService,
};

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/allergens",
    tag = "user",
    summary = "Get the caller's allergen profile",
    description = "Returns the stored profile, creating an empty one on first access",
    responses(
        (status = 200, body = AllergenProfile)
    ),
    security(("bearer" = []))
)]
pub async fn get_allergens(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<AllergenProfile>, ApiError> {
    let profile = state
        .service
        .get_allergen_profile(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(profile))
}
