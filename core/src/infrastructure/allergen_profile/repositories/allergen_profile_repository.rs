use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, SqlErr};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        allergen_profile::{entities::AllergenProfile, ports::AllergenProfileRepository},
        common::entities::app_errors::CoreError,
    },
    entity::allergen_profiles::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresAllergenProfileRepository {
    pub db: DatabaseConnection,
}

impl PostgresAllergenProfileRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl AllergenProfileRepository for PostgresAllergenProfileRepository {
    async fn get_by_user_id(&self, user_id: Uuid) -> Result<Option<AllergenProfile>, CoreError> {
        let profile = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get allergen profile: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(profile.map(AllergenProfile::from))
    }

    async fn create(&self, profile: AllergenProfile) -> Result<AllergenProfile, CoreError> {
        let created = Entity::insert(ActiveModel::from(profile))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                    return CoreError::AlreadyExists;
                }
                error!("Failed to create allergen profile: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(AllergenProfile::from(created))
    }

    async fn update(&self, profile: AllergenProfile) -> Result<AllergenProfile, CoreError> {
        let updated = Entity::update(ActiveModel::from(profile))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update allergen profile: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(AllergenProfile::from(updated))
    }
}
