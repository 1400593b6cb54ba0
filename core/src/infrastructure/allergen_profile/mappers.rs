use sea_orm::ActiveValue::Set;
use serde_json::Value;

use crate::{
    domain::allergen_profile::entities::{AllergenProfile, SeverityLevel},
    entity::allergen_profiles,
};

/// Non-string entries of the stored JSON array are skipped.
fn custom_allergens_from_json(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

impl From<&allergen_profiles::Model> for AllergenProfile {
    fn from(model: &allergen_profiles::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            peanuts: model.peanuts,
            tree_nuts: model.tree_nuts,
            shellfish: model.shellfish,
            fish: model.fish,
            gluten: model.gluten,
            dairy: model.dairy,
            eggs: model.eggs,
            soy: model.soy,
            sesame: model.sesame,
            sulfites: model.sulfites,
            mustard: model.mustard,
            celery: model.celery,
            lupin: model.lupin,
            mollusks: model.mollusks,
            custom_allergens: custom_allergens_from_json(&model.custom_allergens),
            severity_level: SeverityLevel::from(model.severity_level.as_str()),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<allergen_profiles::Model> for AllergenProfile {
    fn from(model: allergen_profiles::Model) -> Self {
        Self::from(&model)
    }
}

impl From<AllergenProfile> for allergen_profiles::ActiveModel {
    fn from(profile: AllergenProfile) -> Self {
        Self {
            id: Set(profile.id),
            user_id: Set(profile.user_id),
            peanuts: Set(profile.peanuts),
            tree_nuts: Set(profile.tree_nuts),
            shellfish: Set(profile.shellfish),
            fish: Set(profile.fish),
            gluten: Set(profile.gluten),
            dairy: Set(profile.dairy),
            eggs: Set(profile.eggs),
            soy: Set(profile.soy),
            sesame: Set(profile.sesame),
            sulfites: Set(profile.sulfites),
            mustard: Set(profile.mustard),
            celery: Set(profile.celery),
            lupin: Set(profile.lupin),
            mollusks: Set(profile.mollusks),
            custom_allergens: Set(Value::from(profile.custom_allergens)),
            severity_level: Set(profile.severity_level.as_str().to_string()),
            created_at: Set(profile.created_at.fixed_offset()),
            updated_at: Set(profile.updated_at.fixed_offset()),
        }
    }
}
