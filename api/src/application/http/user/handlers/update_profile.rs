use axum::extract::State;
use safebite_core::domain::user::{entities::UserProfile, ports::UserService};

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
        user::validators::UpdateProfileRequest,
    },
};

#[utoipa::path(
    put,
    path = "/profile",
    tag = "user",
    summary = "Update the caller's profile",
    description = "Partial update. A combined `name` is split into first and last name on the first whitespace.",
    responses(
        (status = 200, body = UserProfile),
        (status = 404, description = "User not found")
    ),
    request_body = UpdateProfileRequest,
    security(("bearer" = []))
)]
pub async fn update_profile(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateProfileRequest>,
) -> Result<Response<UserProfile>, ApiError> {
    let profile = state
        .service
        .update_profile(identity, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(profile))
}
