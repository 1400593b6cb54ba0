use axum::{
    RequestPartsExt,
    extract::{FromRequestParts, Request, State},
    http::{StatusCode, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use safebite_core::domain::authentication::{ports::AuthService, value_objects::Identity};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::http::server::{api_entities::api_error::ApiError, app_state::AppState};

#[derive(Debug, Error, Deserialize, Serialize, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token not found")]
    TokenNotFound,
}

#[derive(Serialize, Deserialize)]
struct ErrorResponse {
    code: String,
    message: String,
    status: i64,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AuthError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "E_UNAUTHORIZED",
                "Invalid authentication credentials",
            ),
            AuthError::TokenNotFound => (
                StatusCode::UNAUTHORIZED,
                "E_UNAUTHORIZED",
                "Token not found",
            ),
        };

        let error_response = ErrorResponse {
            code: code.to_string(),
            message: message.to_string(),
            status: status.as_u16() as i64,
        };

        let body = serde_json::to_string(&error_response).unwrap_or_else(|_| {
            r#"{"code":"INTERNAL_SERVER_ERROR","message":"Failed to serialize error response"}"#
                .to_string()
        });

        axum::response::Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .header("WWW-Authenticate", "Bearer")
            .body(body.clone().into())
            .unwrap_or_else(|_| axum::response::Response::new(body.into()))
    }
}

pub async fn extract_token_from_bearer(parts: &mut Parts) -> Result<String, AuthError> {
    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map_err(|_| AuthError::TokenNotFound)?;

    Ok(bearer.token().to_string())
}

/// Rejects the request unless it carries a valid bearer token, then stores
/// the caller's [`Identity`] in the request extensions.
pub async fn auth(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let (mut parts, body) = req.into_parts();
    let token = extract_token_from_bearer(&mut parts).await?;

    let identity = state
        .service
        .authorize_request(token)
        .await
        .map_err(|e| {
            debug!("rejected bearer token: {}", e);
            AuthError::InvalidToken
        })?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}

/// Caller identity placed in the extensions by [`auth`].
pub struct RequiredIdentity(pub Identity);

impl<S> FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(RequiredIdentity)
            .ok_or_else(|| ApiError::Unauthorized("Authentication required".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use axum::{Extension, Router, http::Request as HttpRequest, routing::get};
    use axum_test::TestServer;
    use uuid::Uuid;

    use super::*;

    async fn whoami(RequiredIdentity(identity): RequiredIdentity) -> String {
        identity.email
    }

    #[tokio::test]
    async fn test_required_identity_rejects_anonymous_request() {
        let app = Router::new().route("/whoami", get(whoami));
        let server = TestServer::new(app).unwrap();

        let response = server.get("/whoami").await;

        response.assert_status_unauthorized();
    }

    #[tokio::test]
    async fn test_required_identity_reads_extension() {
        let identity = Identity {
            user_id: Uuid::new_v4(),
            email: "ada@example.com".to_string(),
        };
        let app = Router::new()
            .route("/whoami", get(whoami))
            .layer(Extension(identity));
        let server = TestServer::new(app).unwrap();

        let response = server.get("/whoami").await;

        response.assert_status_ok();
        response.assert_text("ada@example.com");
    }

    #[tokio::test]
    async fn test_extract_token_from_bearer() {
        let (mut parts, _) = HttpRequest::builder()
            .header("Authorization", "Bearer abc.def.ghi")
            .body(())
            .unwrap()
            .into_parts();

        let token = extract_token_from_bearer(&mut parts).await;

        assert_eq!(token, Ok("abc.def.ghi".to_string()));
    }

    #[tokio::test]
    async fn test_missing_bearer_is_token_not_found() {
        let (mut parts, _) = HttpRequest::builder()
            .header("Authorization", "Basic dXNlcjpwYXNz")
            .body(())
            .unwrap()
            .into_parts();

        let token = extract_token_from_bearer(&mut parts).await;

        assert_eq!(token, Err(AuthError::TokenNotFound));
    }

    #[test]
    fn test_auth_error_is_unauthorized() {
        let response = AuthError::InvalidToken.into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
