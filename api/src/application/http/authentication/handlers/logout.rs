use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::server::api_entities::{api_error::ApiError, response::Response},
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LogoutResponse {
    pub message: String,
}

/// Tokens are stateless; the client drops its copy.
#[utoipa::path(
    post,
    path = "/logout",
    tag = "authentication",
    summary = "Log out",
    responses(
        (status = 200, body = LogoutResponse)
    ),
    security(("bearer" = []))
)]
pub async fn logout(
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<LogoutResponse>, ApiError> {
    info!(user_id = %identity.id(), "user logged out");

    Ok(Response::OK(LogoutResponse {
        message: "Successfully logged out".to_string(),
    }))
}
