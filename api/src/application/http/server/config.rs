use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::app_state::AppState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConfigResponse {
    pub service: String,
    pub version: String,
    pub root_path: String,
    pub docs_url: String,
    pub openapi_url: String,
}

impl ConfigResponse {
    pub fn new(root_path: &str) -> Self {
        Self {
            service: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            root_path: root_path.to_string(),
            docs_url: format!("{root_path}/swagger-ui"),
            openapi_url: format!("{root_path}/api-docs/openapi.json"),
        }
    }
}

pub async fn get_config(State(state): State<AppState>) -> Json<ConfigResponse> {
    Json(ConfigResponse::new(&state.args.server.root_path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_urls_follow_root_path() {
        let config = ConfigResponse::new("/api/v1");

        assert_eq!(config.service, "safebite-api");
        assert_eq!(config.docs_url, "/api/v1/swagger-ui");
        assert_eq!(config.openapi_url, "/api/v1/api-docs/openapi.json");
    }
}
