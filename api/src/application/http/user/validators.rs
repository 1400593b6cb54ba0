use safebite_core::domain::{
    allergen_profile::{entities::SeverityLevel, value_objects::UpdateAllergenProfileInput},
    user::value_objects::UpdateUserProfileInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(max = 100))]
    pub name: Option<String>,
    #[validate(length(max = 100))]
    pub first_name: Option<String>,
    #[validate(length(max = 100))]
    pub last_name: Option<String>,
    #[validate(length(max = 32))]
    pub phone: Option<String>,
    pub date_of_birth: Option<String>,
    #[validate(length(max = 255))]
    pub emergency_contact: Option<String>,
    pub age: Option<String>,
    pub gender: Option<String>,
}

impl From<UpdateProfileRequest> for UpdateUserProfileInput {
    fn from(request: UpdateProfileRequest) -> Self {
        Self {
            first_name: request.first_name,
            last_name: request.last_name,
            phone: request.phone,
            date_of_birth: request.date_of_birth,
            emergency_contact: request.emergency_contact,
            name: request.name,
            age: request.age,
            gender: request.gender,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateAllergensRequest {
    pub peanuts: Option<bool>,
    pub tree_nuts: Option<bool>,
    pub shellfish: Option<bool>,
    pub fish: Option<bool>,
    pub gluten: Option<bool>,
    pub dairy: Option<bool>,
    pub eggs: Option<bool>,
    pub soy: Option<bool>,
    pub sesame: Option<bool>,
    pub sulfites: Option<bool>,
    pub mustard: Option<bool>,
    pub celery: Option<bool>,
    pub lupin: Option<bool>,
    pub mollusks: Option<bool>,
    #[validate(length(max = 50, message = "at most 50 custom allergens"))]
    pub custom_allergens: Option<Vec<String>>,
    pub severity_level: Option<SeverityLevel>,
}

impl From<UpdateAllergensRequest> for UpdateAllergenProfileInput {
    fn from(request: UpdateAllergensRequest) -> Self {
        Self {
            peanuts: request.peanuts,
            tree_nuts: request.tree_nuts,
            shellfish: request.shellfish,
            fish: request.fish,
            gluten: request.gluten,
            dairy: request.dairy,
            eggs: request.eggs,
            soy: request.soy,
            sesame: request.sesame,
            sulfites: request.sulfites,
            mustard: request.mustard,
            celery: request.celery,
            lupin: request.lupin,
            mollusks: request.mollusks,
            custom_allergens: request.custom_allergens,
            severity_level: request.severity_level,
        }
    }
}
