use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use tracing::{debug, error};

use crate::domain::{
    authentication::{
        entities::{AuthTokens, JwtClaim},
        ports::TokenIssuer,
    },
    common::{AuthConfig, entities::app_errors::CoreError},
    user::entities::User,
};

pub const TOKEN_TYPE: &str = "bearer";

/// HS256 access tokens signed with a shared secret.
#[derive(Clone)]
pub struct HmacTokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expire_minutes: i64,
}

impl HmacTokenIssuer {
    pub fn new(config: &AuthConfig) -> Self {
        let secret = config.jwt_secret.as_bytes();

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            expire_minutes: config.jwt_expire_minutes,
        }
    }

    fn claims_for(&self, user: &User) -> JwtClaim {
        let now = Utc::now();

        JwtClaim {
            sub: user.id,
            email: user.email.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::minutes(self.expire_minutes)).timestamp(),
        }
    }
}

impl TokenIssuer for HmacTokenIssuer {
    fn issue(&self, user: &User) -> Result<AuthTokens, CoreError> {
        let claims = self.claims_for(user);

        let access_token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| {
                error!("Failed to sign access token: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(AuthTokens {
            access_token,
            token_type: TOKEN_TYPE.to_string(),
            user_id: user.id,
            email: user.email.clone(),
            expires_in: self.expire_minutes * 60,
        })
    }

    fn verify(&self, token: &str) -> Result<JwtClaim, CoreError> {
        decode::<JwtClaim>(token, &self.decoding_key, &Validation::new(Algorithm::HS256))
            .map(|data| data.claims)
            .map_err(|e| {
                debug!("Rejected access token: {}", e);
                CoreError::InvalidToken
            })
    }
}
