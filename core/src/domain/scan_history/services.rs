use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{
    allergen_analysis::ports::LLMClient,
    allergen_profile::ports::AllergenProfileRepository,
    authentication::{ports::TokenIssuer, value_objects::Identity},
    common::{entities::app_errors::CoreError, policies::ensure_policy, services::Service},
    crypto::ports::HasherRepository,
    food::ports::NutritionProvider,
    health::ports::HealthCheckRepository,
    scan_history::{
        entities::{HistoryItem, ScanHistoryEntry},
        ports::{ScanHistoryRepository, ScanHistoryService},
        value_objects::AddHistoryInput,
    },
    user::ports::UserRepository,
};

impl<U, AP, SH, HC, H, T, N, LLM> ScanHistoryService for Service<U, AP, SH, HC, H, T, N, LLM>
where
    U: UserRepository,
    AP: AllergenProfileRepository,
    SH: ScanHistoryRepository,
    HC: HealthCheckRepository,
    H: HasherRepository,
    T: TokenIssuer,
    N: NutritionProvider,
    LLM: LLMClient,
{
    async fn get_history(&self, identity: Identity) -> Result<Vec<HistoryItem>, CoreError> {
        let entries = self
            .scan_history_repository
            .list_by_user(identity.id())
            .await?;

        Ok(entries.into_iter().map(HistoryItem::from).collect())
    }

    #[instrument(skip(self, input), fields(user_id = %identity.user_id))]
    async fn add_history(
        &self,
        identity: Identity,
        input: AddHistoryInput,
    ) -> Result<ScanHistoryEntry, CoreError> {
        let entry = ScanHistoryEntry::new(
            identity.id(),
            input.scan_type,
            input.analysis,
            input.scan_data,
        );

        self.scan_history_repository.create(entry).await
    }

    #[instrument(skip(self), fields(user_id = %identity.user_id))]
    async fn delete_history_entry(
        &self,
        identity: Identity,
        entry_id: Uuid,
    ) -> Result<(), CoreError> {
        let entry = self
            .scan_history_repository
            .get_by_id(entry_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        ensure_policy(
            Ok(entry.user_id == identity.id()),
            "Not authorised to delete this entry",
        )?;

        self.scan_history_repository.delete(entry.id).await
    }

    #[instrument(skip(self), fields(user_id = %identity.user_id))]
    async fn clear_history(&self, identity: Identity) -> Result<u64, CoreError> {
        let removed = self
            .scan_history_repository
            .delete_all_by_user(identity.id())
            .await?;

        info!(removed, "scan history cleared");
        Ok(removed)
    }
}
