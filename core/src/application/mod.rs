use tracing::info;

use crate::{
    domain::{
        allergen_analysis::pipeline::AllergenAnalysisPipeline,
        common::{SafebiteConfig, entities::app_errors::CoreError, services::Service},
    },
    infrastructure::{
        allergen_profile::PostgresAllergenProfileRepository,
        crypto::argon2_hasher::Argon2HasherRepository,
        db::postgres::{Postgres, PostgresConfig},
        health::PostgresHealthCheckRepository,
        jwt::hmac_token_issuer::HmacTokenIssuer,
        llm::gemini_client::GeminiLLMClient,
        nutrition::fatsecret_client::FatSecretClient,
        scan_history::PostgresScanHistoryRepository,
        user::repository::PostgresUserRepository,
    },
};

pub type SafebiteService = Service<
    PostgresUserRepository,
    PostgresAllergenProfileRepository,
    PostgresScanHistoryRepository,
    PostgresHealthCheckRepository,
    Argon2HasherRepository,
    HmacTokenIssuer,
    FatSecretClient,
    GeminiLLMClient,
>;

/// Connects to Postgres, applies pending migrations and wires every adapter
/// into the application service.
pub async fn create_service(config: SafebiteConfig) -> Result<SafebiteService, CoreError> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;
    postgres.migrate().await?;

    let db = postgres.get_db();
    let llm_client = GeminiLLMClient::new(&config.llm)?;
    let nutrition_provider = FatSecretClient::new(&config.fatsecret)?;

    info!(model = %config.llm.gemini_model, "application service ready");

    Ok(Service::new(
        PostgresUserRepository::new(db.clone()),
        PostgresAllergenProfileRepository::new(db.clone()),
        PostgresScanHistoryRepository::new(db.clone()),
        PostgresHealthCheckRepository::new(db),
        Argon2HasherRepository::new(),
        HmacTokenIssuer::new(&config.auth),
        nutrition_provider,
        AllergenAnalysisPipeline::new(llm_client),
    ))
}
