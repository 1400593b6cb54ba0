use serde_json::Value;

use crate::domain::scan_history::entities::ScanType;

#[derive(Debug, Clone)]
pub struct AddHistoryInput {
    pub scan_type: ScanType,
    pub analysis: Value,
    /// The full request payload, stored as-is.
    pub scan_data: Value,
}
