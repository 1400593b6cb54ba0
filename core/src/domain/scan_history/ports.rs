use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    scan_history::{
        entities::{HistoryItem, ScanHistoryEntry},
        value_objects::AddHistoryInput,
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait ScanHistoryRepository: Send + Sync {
    fn create(
        &self,
        entry: ScanHistoryEntry,
    ) -> impl Future<Output = Result<ScanHistoryEntry, CoreError>> + Send;

    /// Newest first.
    fn list_by_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<ScanHistoryEntry>, CoreError>> + Send;

    fn get_by_id(
        &self,
        entry_id: Uuid,
    ) -> impl Future<Output = Result<Option<ScanHistoryEntry>, CoreError>> + Send;

    fn delete(&self, entry_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Returns the number of removed entries.
    fn delete_all_by_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ScanHistoryService: Send + Sync {
    fn get_history(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<HistoryItem>, CoreError>> + Send;

    fn add_history(
        &self,
        identity: Identity,
        input: AddHistoryInput,
    ) -> impl Future<Output = Result<ScanHistoryEntry, CoreError>> + Send;

    fn delete_history_entry(
        &self,
        identity: Identity,
        entry_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn clear_history(&self, identity: Identity)
    -> impl Future<Output = Result<u64, CoreError>> + Send;
}
