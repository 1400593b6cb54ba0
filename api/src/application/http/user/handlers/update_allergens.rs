use axum::extract::State;
use safebite_core::domain::allergen_profile::{
    entities::AllergenProfile, ports::AllergenProfileService,
};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
        user::validators::UpdateAllergensRequest,
    },
};

#[utoipa::path(
    put,
    path = "/allergens",
    tag = "user",
    summary = "Update the caller's allergen profile",
    description = "Only the supplied fields change",
    responses(
        (status = 200, body = AllergenProfile)
    ),
    request_body = UpdateAllergensRequest,
    security(("bearer" = []))
)]
pub async fn update_allergens(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateAllergensRequest>,
) -> Result<Response<AllergenProfile>, ApiError> {
    let profile = state
        .service
        .update_allergen_profile(identity, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(profile))
}
