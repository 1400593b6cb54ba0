use safebite_core::domain::scan_history::{entities::ScanType, value_objects::AddHistoryInput};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use validator::Validate;

/// History entry posted by the client. Fields besides `scan_type` and
/// `analysis` are kept and stored with the raw scan data.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct AddHistoryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "barcode")]
    pub scan_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub analysis: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<AddHistoryRequest> for AddHistoryInput {
    fn from(request: AddHistoryRequest) -> Self {
        let scan_type = request
            .scan_type
            .as_deref()
            .map(ScanType::from)
            .unwrap_or_default();
        let scan_data = serde_json::to_value(&request).unwrap_or(Value::Null);
        let analysis = request
            .analysis
            .unwrap_or_else(|| Value::Object(Map::new()));

        Self {
            scan_type,
            analysis,
            scan_data,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_add_history_keeps_whole_body_as_scan_data() {
        let body = json!({
            "scan_type": "voice",
            "analysis": {"dishName": "Pad Thai"},
            "image_uri": "file://scan.jpg"
        });
        let request: AddHistoryRequest = serde_json::from_value(body.clone()).unwrap();
        let input = AddHistoryInput::from(request);

        assert_eq!(input.scan_type, ScanType::Voice);
        assert_eq!(input.analysis, json!({"dishName": "Pad Thai"}));
        assert_eq!(input.scan_data, body);
    }

    #[test]
    fn test_add_history_defaults() {
        let request: AddHistoryRequest = serde_json::from_value(json!({})).unwrap();
        let input = AddHistoryInput::from(request);

        assert_eq!(input.scan_type, ScanType::Image);
        assert_eq!(input.analysis, json!({}));
    }
}
