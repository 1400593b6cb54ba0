use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DatabaseHealthStatus {
    pub status: String,
    pub database: String,
    pub response_time_ms: u64,
    pub checked_at: DateTime<Utc>,
}

impl DatabaseHealthStatus {
    pub fn up(response_time_ms: u64) -> Self {
        Self {
            status: "ready".to_string(),
            database: "up".to_string(),
            response_time_ms,
            checked_at: Utc::now(),
        }
    }
}
