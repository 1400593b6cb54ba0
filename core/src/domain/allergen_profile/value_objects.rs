use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::allergen_profile::entities::SeverityLevel;

/// Partial update: `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateAllergenProfileInput {
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
    pub custom_allergens: Option<Vec<String>>,
    pub severity_level: Option<SeverityLevel>,
}
