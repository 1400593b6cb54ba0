use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        scan_history::{entities::ScanHistoryEntry, ports::ScanHistoryRepository},
    },
    entity::food_scans::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresScanHistoryRepository {
    pub db: DatabaseConnection,
}

impl PostgresScanHistoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ScanHistoryRepository for PostgresScanHistoryRepository {
    async fn create(&self, entry: ScanHistoryEntry) -> Result<ScanHistoryEntry, CoreError> {
        let created = Entity::insert(ActiveModel::from(entry))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create scan history entry: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(ScanHistoryEntry::from(created))
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<ScanHistoryEntry>, CoreError> {
        let entries = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list scan history: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(entries.into_iter().map(ScanHistoryEntry::from).collect())
    }

    async fn get_by_id(&self, entry_id: Uuid) -> Result<Option<ScanHistoryEntry>, CoreError> {
        let entry = Entity::find_by_id(entry_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get scan history entry: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(entry.map(ScanHistoryEntry::from))
    }

    async fn delete(&self, entry_id: Uuid) -> Result<(), CoreError> {
        let result = Entity::delete_by_id(entry_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete scan history entry: {}", e);
                CoreError::InternalServerError
            })?;

        if result.rows_affected == 0 {
            return Err(CoreError::NotFound);
        }

        Ok(())
    }

    async fn delete_all_by_user(&self, user_id: Uuid) -> Result<u64, CoreError> {
        let result = Entity::delete_many()
            .filter(Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to clear scan history: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(result.rows_affected)
    }
}
