use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    allergen_profile::{entities::AllergenProfile, value_objects::UpdateAllergenProfileInput},
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
};

#[cfg_attr(test, mockall::automock)]
pub trait AllergenProfileRepository: Send + Sync {
    fn get_by_user_id(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<AllergenProfile>, CoreError>> + Send;

    fn create(
        &self,
        profile: AllergenProfile,
    ) -> impl Future<Output = Result<AllergenProfile, CoreError>> + Send;

    fn update(
        &self,
        profile: AllergenProfile,
    ) -> impl Future<Output = Result<AllergenProfile, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait AllergenProfileService: Send + Sync {
    /// Returns the caller's profile, creating the default one on first access.
    fn get_allergen_profile(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<AllergenProfile, CoreError>> + Send;

    fn update_allergen_profile(
        &self,
        identity: Identity,
        input: UpdateAllergenProfileInput,
    ) -> impl Future<Output = Result<AllergenProfile, CoreError>> + Send;
}
