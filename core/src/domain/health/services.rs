use crate::domain::{
    allergen_analysis::ports::LLMClient,
    allergen_profile::ports::AllergenProfileRepository,
    authentication::ports::TokenIssuer,
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    food::ports::NutritionProvider,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    scan_history::ports::ScanHistoryRepository,
    user::ports::UserRepository,
};

impl<U, AP, SH, HC, H, T, N, LLM> HealthCheckService for Service<U, AP, SH, HC, H, T, N, LLM>
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
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::services::tests::ServiceMocks;

    #[tokio::test]
    async fn test_readness_forwards_database_status() {
        let mut mocks = ServiceMocks::default();
        mocks
            .health
            .expect_readness()
            .returning(|| Box::pin(async { Ok(DatabaseHealthStatus::up(3)) }));
        let service = mocks.build();

        let status = service.readness().await.unwrap();
        assert_eq!(status.database, "up");
        assert_eq!(status.response_time_ms, 3);
    }

    #[tokio::test]
    async fn test_health_propagates_database_failure() {
        let mut mocks = ServiceMocks::default();
        mocks
            .health
            .expect_health()
            .returning(|| Box::pin(async { Err(CoreError::InternalServerError) }));
        let service = mocks.build();

        assert_eq!(service.health().await, Err(CoreError::InternalServerError));
    }
}
