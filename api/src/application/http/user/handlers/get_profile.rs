use axum::extract::State;
use safebite_core::domain::user::{entities::UserProfile, ports::UserService};

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/profile",
    tag = "user",
    summary = "Get the caller's profile",
    responses(
        (status = 200, body = UserProfile),
        (status = 404, description = "User not found")
    ),
    security(("bearer" = []))
)]
pub async fn get_profile(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<UserProfile>, ApiError> {
    let profile = state
        .service
        .get_profile(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(profile))
}
