use tracing::{info, instrument, warn};

use crate::domain::{
    allergen_analysis::ports::LLMClient,
    allergen_profile::ports::AllergenProfileRepository,
    authentication::{
        entities::AuthTokens,
        ports::{AuthService, TokenIssuer},
        value_objects::Identity,
    },
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    food::ports::NutritionProvider,
    health::ports::HealthCheckRepository,
    scan_history::ports::ScanHistoryRepository,
    user::{
        entities::User,
        ports::UserRepository,
        value_objects::{LoginInput, RegisterUserInput},
    },
};

pub const MIN_PASSWORD_LENGTH: usize = 6;

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn validate_registration(input: &RegisterUserInput) -> Result<(), CoreError> {
    let email = input.email.trim();
    let valid_email = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));

    if !valid_email {
        return Err(CoreError::ValidationError("Invalid email address".to_string()));
    }

    if input.password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::ValidationError(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}

impl<U, AP, SH, HC, H, T, N, LLM> AuthService for Service<U, AP, SH, HC, H, T, N, LLM>
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
    #[instrument(skip(self, input), fields(email = %input.email))]
    async fn register(&self, input: RegisterUserInput) -> Result<User, CoreError> {
        validate_registration(&input)?;
        let email = normalize_email(&input.email);

        if self
            .user_repository
            .get_by_email(email.clone())
            .await?
            .is_some()
        {
            return Err(CoreError::EmailAlreadyExists);
        }

        let password_hash = self.hasher_repository.hash_password(input.password).await?;

        let user = self
            .user_repository
            .create_user(User::new(
                email,
                password_hash,
                input.first_name,
                input.last_name,
            ))
            .await?;

        info!(user_id = %user.id, "user registered");
        Ok(user)
    }

    #[instrument(skip(self, input), fields(email = %input.email))]
    async fn login(&self, input: LoginInput) -> Result<AuthTokens, CoreError> {
        let user = self
            .user_repository
            .get_by_email(normalize_email(&input.email))
            .await?
            .ok_or(CoreError::InvalidCredentials)?;

        let verified = self
            .hasher_repository
            .verify_password(input.password, user.password_hash.clone())
            .await?;

        if !verified {
            warn!(user_id = %user.id, "password verification failed");
            return Err(CoreError::InvalidCredentials);
        }

        self.token_issuer.issue(&user)
    }

    async fn authorize_request(&self, token: String) -> Result<Identity, CoreError> {
        let claims = self
            .token_issuer
            .verify(&token)
            .map_err(|_| CoreError::InvalidToken)?;

        let user = self
            .user_repository
            .get_by_id(claims.sub)
            .await?
            .ok_or(CoreError::InvalidToken)?;

        Ok(Identity {
            user_id: user.id,
            email: user.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        authentication::entities::JwtClaim, common::services::tests::ServiceMocks,
    };

    fn register_input(email: &str, password: &str) -> RegisterUserInput {
        RegisterUserInput {
            email: email.to_string(),
            password: password.to_string(),
            first_name: Some("Ada".to_string()),
            last_name: None,
        }
    }

    fn stored_user() -> User {
        User::new(
            "ada@example.com".to_string(),
            "argon-hash".to_string(),
            Some("Ada".to_string()),
            None,
        )
    }

    #[tokio::test]
    async fn test_register_hashes_password_and_normalizes_email() {
        let mut mocks = ServiceMocks::default();
        mocks
            .users
            .expect_get_by_email()
            .withf(|email| email == "ada@example.com")
            .returning(|_| Box::pin(async { Ok(None) }));
        mocks
            .hasher
            .expect_hash_password()
            .withf(|password| password == "secret1")
            .returning(|_| Box::pin(async { Ok("argon-hash".to_string()) }));
        mocks
            .users
            .expect_create_user()
            .returning(|u| Box::pin(async move { Ok(u) }));
        let service = mocks.build();

        let user = service
            .register(register_input("  Ada@Example.com ", "secret1"))
            .await
            .unwrap();

        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.password_hash, "argon-hash");
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let mut mocks = ServiceMocks::default();
        mocks
            .users
            .expect_get_by_email()
            .returning(|_| Box::pin(async { Ok(Some(stored_user())) }));
        mocks.users.expect_create_user().never();
        let service = mocks.build();

        let result = service
            .register(register_input("ada@example.com", "secret1"))
            .await;
        assert_eq!(result, Err(CoreError::EmailAlreadyExists));
    }

    #[tokio::test]
    async fn test_register_rejects_short_password_and_bad_email() {
        let service = ServiceMocks::default().build();

        assert!(matches!(
            service.register(register_input("ada@example.com", "12345")).await,
            Err(CoreError::ValidationError(_))
        ));
        assert!(matches!(
            service.register(register_input("not-an-email", "secret1")).await,
            Err(CoreError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn test_login_with_wrong_password() {
        let mut mocks = ServiceMocks::default();
        mocks
            .users
            .expect_get_by_email()
            .returning(|_| Box::pin(async { Ok(Some(stored_user())) }));
        mocks
            .hasher
            .expect_verify_password()
            .returning(|_, _| Box::pin(async { Ok(false) }));
        mocks.tokens.expect_issue().never();
        let service = mocks.build();

        let result = service
            .login(LoginInput {
                email: "ada@example.com".to_string(),
                password: "wrong".to_string(),
            })
            .await;
        assert_eq!(result, Err(CoreError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let mut mocks = ServiceMocks::default();
        mocks
            .users
            .expect_get_by_email()
            .returning(|_| Box::pin(async { Ok(None) }));
        let service = mocks.build();

        let result = service
            .login(LoginInput {
                email: "nobody@example.com".to_string(),
                password: "secret1".to_string(),
            })
            .await;
        assert_eq!(result, Err(CoreError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_issues_token() {
        let user = stored_user();
        let user_id = user.id;

        let mut mocks = ServiceMocks::default();
        mocks.users.expect_get_by_email().returning(move |_| {
            let user = user.clone();
            Box::pin(async move { Ok(Some(user)) })
        });
        mocks
            .hasher
            .expect_verify_password()
            .withf(|password, hash| password == "secret1" && hash == "argon-hash")
            .returning(|_, _| Box::pin(async { Ok(true) }));
        mocks.tokens.expect_issue().returning(|user| {
            Ok(AuthTokens {
                access_token: "jwt".to_string(),
                token_type: "bearer".to_string(),
                user_id: user.id,
                email: user.email.clone(),
                expires_in: 1800,
            })
        });
        let service = mocks.build();

        let tokens = service
            .login(LoginInput {
                email: "ada@example.com".to_string(),
                password: "secret1".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(tokens.user_id, user_id);
        assert_eq!(tokens.access_token, "jwt");
    }

    #[tokio::test]
    async fn test_authorize_request_resolves_identity() {
        let user = stored_user();
        let user_id = user.id;

        let mut mocks = ServiceMocks::default();
        mocks.tokens.expect_verify().returning(move |_| {
            Ok(JwtClaim {
                sub: user_id,
                email: "ada@example.com".to_string(),
                iat: 0,
                exp: i64::MAX,
            })
        });
        mocks.users.expect_get_by_id().returning(move |_| {
            let user = user.clone();
            Box::pin(async move { Ok(Some(user)) })
        });
        let service = mocks.build();

        let identity = service.authorize_request("jwt".to_string()).await.unwrap();
        assert_eq!(identity.id(), user_id);
    }

    #[tokio::test]
    async fn test_authorize_request_invalid_token() {
        let mut mocks = ServiceMocks::default();
        mocks
            .tokens
            .expect_verify()
            .returning(|_| Err(CoreError::InternalServerError));
        mocks.users.expect_get_by_id().never();
        let service = mocks.build();

        let result = service.authorize_request("garbage".to_string()).await;
        assert_eq!(result, Err(CoreError::InvalidToken));
    }
}
