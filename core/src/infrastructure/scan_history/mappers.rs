use sea_orm::ActiveValue::Set;

use crate::{
    domain::scan_history::entities::{ScanHistoryEntry, ScanType},
    entity::food_scans,
};

impl From<&food_scans::Model> for ScanHistoryEntry {
    fn from(model: &food_scans::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            scan_type: ScanType::from(model.scan_type.as_str()),
            food_id: model.food_id.clone(),
            food_name: model.food_name.clone(),
            analysis_result: model.analysis_result.clone(),
            scan_data: model.scan_data.clone(),
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<food_scans::Model> for ScanHistoryEntry {
    fn from(model: food_scans::Model) -> Self {
        Self::from(&model)
    }
}

impl From<ScanHistoryEntry> for food_scans::ActiveModel {
    fn from(entry: ScanHistoryEntry) -> Self {
        Self {
            id: Set(entry.id),
            user_id: Set(entry.user_id),
            scan_type: Set(entry.scan_type.as_str().to_string()),
            food_id: Set(entry.food_id),
            food_name: Set(entry.food_name),
            analysis_result: Set(entry.analysis_result),
            scan_data: Set(entry.scan_data),
            created_at: Set(entry.created_at.fixed_offset()),
        }
    }
}
