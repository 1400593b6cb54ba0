use std::future::Future;

use crate::domain::{
    authentication::{
        entities::{AuthTokens, JwtClaim},
        value_objects::Identity,
    },
    common::entities::app_errors::CoreError,
    user::{
        entities::User,
        value_objects::{LoginInput, RegisterUserInput},
    },
};

/// Issues and verifies the bearer tokens handed to clients.
#[cfg_attr(test, mockall::automock)]
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, user: &User) -> Result<AuthTokens, CoreError>;

    fn verify(&self, token: &str) -> Result<JwtClaim, CoreError>;
}

#[cfg_attr(test, mockall::automock)]
pub trait AuthService: Send + Sync {
    fn register(
        &self,
        input: RegisterUserInput,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn login(&self, input: LoginInput) -> impl Future<Output = Result<AuthTokens, CoreError>> + Send;

    fn authorize_request(
        &self,
        token: String,
    ) -> impl Future<Output = Result<Identity, CoreError>> + Send;
}
