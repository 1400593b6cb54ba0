use tracing::instrument;

use crate::domain::{
    allergen_analysis::ports::LLMClient,
    allergen_profile::ports::AllergenProfileRepository,
    authentication::{ports::TokenIssuer, value_objects::Identity},
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    food::ports::NutritionProvider,
    health::ports::HealthCheckRepository,
    scan_history::ports::ScanHistoryRepository,
    user::{
        entities::UserProfile,
        ports::{UserRepository, UserService},
        value_objects::UpdateUserProfileInput,
    },
};

impl<U, AP, SH, HC, H, T, N, LLM> UserService for Service<U, AP, SH, HC, H, T, N, LLM>
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
    async fn get_profile(&self, identity: Identity) -> Result<UserProfile, CoreError> {
        let user = self
            .user_repository
            .get_by_id(identity.id())
            .await?
            .ok_or(CoreError::NotFound)?;

        Ok(UserProfile::from(user))
    }

    #[instrument(skip(self, input), fields(user_id = %identity.user_id))]
    async fn update_profile(
        &self,
        identity: Identity,
        input: UpdateUserProfileInput,
    ) -> Result<UserProfile, CoreError> {
        let mut user = self
            .user_repository
            .get_by_id(identity.id())
            .await?
            .ok_or(CoreError::NotFound)?;

        user.update(input);
        let user = self.user_repository.update_user(user).await?;

        Ok(UserProfile::from(user))
    }
}
