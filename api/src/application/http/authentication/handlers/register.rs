use axum::extract::State;
use safebite_core::domain::{
    authentication::ports::AuthService, user::value_objects::RegisterUserInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    authentication::validators::RegisterRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RegisterResponse {
    pub message: String,
    pub user_id: Uuid,
    pub email: String,
}

#[utoipa::path(
    post,
    path = "/register",
    tag = "authentication",
    summary = "Register a new user",
    description = "Creates an account with an email and password. Emails are unique.",
    responses(
        (status = 201, body = RegisterResponse),
        (status = 400, description = "Invalid email or password"),
        (status = 409, description = "Email already registered")
    ),
    request_body = RegisterRequest
)]
pub async fn register(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RegisterRequest>,
) -> Result<Response<RegisterResponse>, ApiError> {
    let user = state
        .service
        .register(RegisterUserInput {
            email: payload.email,
            password: payload.password,
            first_name: payload.first_name,
            last_name: payload.last_name,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(RegisterResponse {
        message: "User registered successfully".to_string(),
        user_id: user.id,
        email: user.email,
    }))
}
