use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{
    allergen_analysis::ports::LLMClient,
    allergen_profile::{
        entities::AllergenProfile,
        ports::{AllergenProfileRepository, AllergenProfileService},
        value_objects::UpdateAllergenProfileInput,
    },
    authentication::{ports::TokenIssuer, value_objects::Identity},
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    food::ports::NutritionProvider,
    health::ports::HealthCheckRepository,
    scan_history::ports::ScanHistoryRepository,
    user::ports::UserRepository,
};

impl<U, AP, SH, HC, H, T, N, LLM> Service<U, AP, SH, HC, H, T, N, LLM>
where
    AP: AllergenProfileRepository,
{
    /// Stored profile of the user, or a freshly persisted default one.
    pub(crate) async fn profile_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<AllergenProfile, CoreError> {
        if let Some(profile) = self
            .allergen_profile_repository
            .get_by_user_id(user_id)
            .await?
        {
            return Ok(profile);
        }

        info!(%user_id, "creating default allergen profile");
        match self
            .allergen_profile_repository
            .create(AllergenProfile::new(user_id))
            .await
        {
            // A concurrent first access inserted the row first.
            Err(CoreError::AlreadyExists) => self
                .allergen_profile_repository
                .get_by_user_id(user_id)
                .await?
                .ok_or(CoreError::InternalServerError),
            result => result,
        }
    }
}

impl<U, AP, SH, HC, H, T, N, LLM> AllergenProfileService for Service<U, AP, SH, HC, H, T, N, LLM>
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
    async fn get_allergen_profile(&self, identity: Identity) -> Result<AllergenProfile, CoreError> {
        self.profile_for_user(identity.id()).await
    }

    #[instrument(skip(self, input), fields(user_id = %identity.user_id))]
    async fn update_allergen_profile(
        &self,
        identity: Identity,
        input: UpdateAllergenProfileInput,
    ) -> Result<AllergenProfile, CoreError> {
        let mut profile = self.profile_for_user(identity.id()).await?;
        profile.update(input);

        self.allergen_profile_repository.update(profile).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        allergen_profile::entities::SeverityLevel, common::services::tests::ServiceMocks,
    };

    fn identity(user_id: Uuid) -> Identity {
        Identity {
            user_id,
            email: "user@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_first_access_creates_default_profile() {
        let user_id = Uuid::new_v4();

        let mut mocks = ServiceMocks::default();
        mocks
            .profiles
            .expect_get_by_user_id()
            .returning(|_| Box::pin(async { Ok(None) }));
        mocks
            .profiles
            .expect_create()
            .withf(move |p| p.user_id == user_id && p.active_allergens().is_empty())
            .times(1)
            .returning(|p| Box::pin(async move { Ok(p) }));
        let service = mocks.build();

        let profile = service.get_allergen_profile(identity(user_id)).await.unwrap();
        assert_eq!(profile.severity_level, SeverityLevel::Moderate);
    }

    #[tokio::test]
    async fn test_concurrent_first_access_reads_winning_row() {
        let user_id = Uuid::new_v4();
        let mut winner = AllergenProfile::new(user_id);
        winner.eggs = true;

        let mut seq = mockall::Sequence::new();
        let mut mocks = ServiceMocks::default();
        mocks
            .profiles
            .expect_get_by_user_id()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Box::pin(async { Ok(None) }));
        mocks
            .profiles
            .expect_create()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Box::pin(async { Err(CoreError::AlreadyExists) }));
        mocks
            .profiles
            .expect_get_by_user_id()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_| {
                let winner = winner.clone();
                Box::pin(async move { Ok(Some(winner)) })
            });
        let service = mocks.build();

        let profile = service.get_allergen_profile(identity(user_id)).await.unwrap();
        assert!(profile.eggs);
    }

    #[tokio::test]
    async fn test_other_create_failures_propagate() {
        let mut mocks = ServiceMocks::default();
        mocks
            .profiles
            .expect_get_by_user_id()
            .times(1)
            .returning(|_| Box::pin(async { Ok(None) }));
        mocks
            .profiles
            .expect_create()
            .returning(|_| Box::pin(async { Err(CoreError::InternalServerError) }));
        let service = mocks.build();

        let result = service.get_allergen_profile(identity(Uuid::new_v4())).await;
        assert_eq!(result, Err(CoreError::InternalServerError));
    }

    #[tokio::test]
    async fn test_existing_profile_is_returned_without_create() {
        let user_id = Uuid::new_v4();
        let mut stored = AllergenProfile::new(user_id);
        stored.peanuts = true;

        let mut mocks = ServiceMocks::default();
        mocks.profiles.expect_get_by_user_id().returning(move |_| {
            let stored = stored.clone();
            Box::pin(async move { Ok(Some(stored)) })
        });
        mocks.profiles.expect_create().never();
        let service = mocks.build();

        let profile = service.get_allergen_profile(identity(user_id)).await.unwrap();
        assert!(profile.peanuts);
    }

    #[tokio::test]
    async fn test_update_merges_partial_input() {
        let user_id = Uuid::new_v4();
        let mut stored = AllergenProfile::new(user_id);
        stored.gluten = true;

        let mut mocks = ServiceMocks::default();
        mocks.profiles.expect_get_by_user_id().returning(move |_| {
            let stored = stored.clone();
            Box::pin(async move { Ok(Some(stored)) })
        });
        mocks
            .profiles
            .expect_update()
            .times(1)
            .returning(|p| Box::pin(async move { Ok(p) }));
        let service = mocks.build();

        let profile = service
            .update_allergen_profile(
                identity(user_id),
                UpdateAllergenProfileInput {
                    sesame: Some(true),
                    custom_allergens: Some(vec![" kiwi ".to_string(), "".to_string()]),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(profile.gluten);
        assert!(profile.sesame);
        assert_eq!(profile.custom_allergens, vec!["kiwi".to_string()]);
    }
}
