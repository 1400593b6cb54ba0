use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScanType {
    #[default]
    Image,
    Barcode,
    Voice,
}

impl ScanType {
    pub fn as_str(&self) -> &str {
        match self {
            ScanType::Image => "image",
            ScanType::Barcode => "barcode",
            ScanType::Voice => "voice",
        }
    }
}

impl From<&str> for ScanType {
    fn from(s: &str) -> Self {
        match s {
            "barcode" => ScanType::Barcode,
            "voice" => ScanType::Voice,
            _ => ScanType::Image,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScanHistoryEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub scan_type: ScanType,
    pub food_id: String,
    pub food_name: String,
    pub analysis_result: Value,
    pub scan_data: Value,
    pub created_at: DateTime<Utc>,
}

impl ScanHistoryEntry {
    /// `food_id` and `food_name` are taken from the analysis, which carries
    /// the dish name under `food_name` or, from the mobile client, `dishName`.
    pub fn new(user_id: Uuid, scan_type: ScanType, analysis_result: Value, scan_data: Value) -> Self {
        let (now, timestamp) = generate_timestamp();

        let food_name = ["food_name", "dishName"]
            .iter()
            .find_map(|key| analysis_result.get(key).and_then(Value::as_str))
            .unwrap_or_default()
            .to_string();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            scan_type,
            food_id: food_name.clone(),
            food_name,
            analysis_result,
            scan_data,
            created_at: now,
        }
    }
}

/// History row as listed to the client: the stored analysis fields with
/// the entry id and timestamp alongside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HistoryItem {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub scan_type: ScanType,
    #[serde(flatten)]
    pub analysis: Map<String, Value>,
}

impl From<ScanHistoryEntry> for HistoryItem {
    fn from(entry: ScanHistoryEntry) -> Self {
        let analysis = match entry.analysis_result {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        Self {
            id: entry.id,
            timestamp: entry.created_at,
            scan_type: entry.scan_type,
            analysis,
        }
    }
}
