use axum::extract::State;
use safebite_core::domain::{
    authentication::{entities::AuthTokens, ports::AuthService},
    user::value_objects::LoginInput,
};

use crate::application::http::{
    authentication::validators::LoginRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/login",
    tag = "authentication",
    summary = "Log in",
    description = "Verifies the credentials and returns a bearer access token",
    responses(
        (status = 200, body = AuthTokens),
        (status = 401, description = "Invalid email or password")
    ),
    request_body = LoginRequest
)]
pub async fn login(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<LoginRequest>,
) -> Result<Response<AuthTokens>, ApiError> {
    let tokens = state
        .service
        .login(LoginInput {
            email: payload.email,
            password: payload.password,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(tokens))
}
