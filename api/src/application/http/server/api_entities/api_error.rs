use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Query, Request, rejection::JsonRejection},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use safebite_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    BadGateway(String),
    #[error("{0}")]
    ServiceUnavailable(String),
    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    pub code: String,
    pub message: String,
    pub status: u16,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "E_BAD_REQUEST",
            ApiError::Unauthorized(_) => "E_UNAUTHORIZED",
            ApiError::Forbidden(_) => "E_FORBIDDEN",
            ApiError::NotFound(_) => "E_NOT_FOUND",
            ApiError::Conflict(_) => "E_CONFLICT",
            ApiError::BadGateway(_) => "E_BAD_GATEWAY",
            ApiError::ServiceUnavailable(_) => "E_SERVICE_UNAVAILABLE",
            ApiError::InternalServerError(_) => "E_INTERNAL_SERVER_ERROR",
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound => ApiError::NotFound("Resource not found".to_string()),
            CoreError::AlreadyExists => ApiError::Conflict("Resource already exists".to_string()),
            CoreError::ValidationError(message) => ApiError::BadRequest(message),
            CoreError::Forbidden(message) => ApiError::Forbidden(message),
            CoreError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid email or password".to_string())
            }
            CoreError::InvalidToken => {
                ApiError::Unauthorized("Invalid authentication credentials".to_string())
            }
            CoreError::EmailAlreadyExists => {
                ApiError::Conflict("Email already registered".to_string())
            }
            CoreError::ExternalServiceError(message) => ApiError::BadGateway(message),
            CoreError::InternalServerError => {
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ApiErrorResponse {
            code: self.code().to_string(),
            message: self.to_string(),
            status: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}

/// JSON body extractor that also runs `validator` rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        Ok(ValidateJson(value))
    }
}

/// Query string extractor that also runs `validator` rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidateQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        Ok(ValidateQuery(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_status_codes() {
        let cases = [
            (CoreError::NotFound, StatusCode::NOT_FOUND),
            (CoreError::AlreadyExists, StatusCode::CONFLICT),
            (
                CoreError::ValidationError("bad".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                CoreError::Forbidden("nope".to_string()),
                StatusCode::FORBIDDEN,
            ),
            (CoreError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (CoreError::InvalidToken, StatusCode::UNAUTHORIZED),
            (CoreError::EmailAlreadyExists, StatusCode::CONFLICT),
            (
                CoreError::ExternalServiceError("down".to_string()),
                StatusCode::BAD_GATEWAY,
            ),
            (
                CoreError::InternalServerError,
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(ApiError::from(error).status_code(), status);
        }
    }

    #[test]
    fn test_validation_message_is_kept() {
        let error = ApiError::from(CoreError::ValidationError(
            "Invalid barcode format".to_string(),
        ));

        assert_eq!(
            error,
            ApiError::BadRequest("Invalid barcode format".to_string())
        );
    }

    #[test]
    fn test_into_response_sets_status() {
        let response = ApiError::Conflict("Email already registered".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[derive(Debug, Deserialize, Validate)]
    struct Payload {
        #[validate(length(min = 3))]
        name: String,
    }

    async fn echo(ValidateJson(payload): ValidateJson<Payload>) -> String {
        payload.name
    }

    async fn echo_query(ValidateQuery(payload): ValidateQuery<Payload>) -> String {
        payload.name
    }

    fn server() -> axum_test::TestServer {
        let app = axum::Router::new().route("/echo", axum::routing::post(echo).get(echo_query));
        axum_test::TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_validate_json_accepts_valid_body() {
        let response = server()
            .post("/echo")
            .json(&serde_json::json!({"name": "Ada"}))
            .await;

        response.assert_status_ok();
        response.assert_text("Ada");
    }

    #[tokio::test]
    async fn test_validate_json_rejects_invalid_body() {
        let response = server()
            .post("/echo")
            .json(&serde_json::json!({"name": "A"}))
            .await;

        response.assert_status_bad_request();
        let body: ApiErrorResponse = response.json();
        assert_eq!(body.code, "E_BAD_REQUEST");
        assert_eq!(body.status, 400);
    }

    #[tokio::test]
    async fn test_validate_json_rejects_malformed_body() {
        let response = server().post("/echo").text("{not json").await;

        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_validate_query_rejects_invalid_params() {
        let response = server().get("/echo").add_query_param("name", "A").await;

        response.assert_status_bad_request();
    }
}
