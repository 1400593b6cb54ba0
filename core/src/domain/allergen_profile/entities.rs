use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    allergen_profile::value_objects::UpdateAllergenProfileInput, common::generate_timestamp,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    Mild,
    #[default]
    Moderate,
    Severe,
}

impl SeverityLevel {
    pub fn as_str(&self) -> &str {
        match self {
            SeverityLevel::Mild => "mild",
            SeverityLevel::Moderate => "moderate",
            SeverityLevel::Severe => "severe",
        }
    }
}

impl From<&str> for SeverityLevel {
    fn from(s: &str) -> Self {
        match s {
            "mild" => SeverityLevel::Mild,
            "severe" => SeverityLevel::Severe,
            _ => SeverityLevel::Moderate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AllergenProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub peanuts: bool,
    pub tree_nuts: bool,
    pub shellfish: bool,
    pub fish: bool,
    pub gluten: bool,
    pub dairy: bool,
    pub eggs: bool,
    pub soy: bool,
    pub sesame: bool,
    pub sulfites: bool,
    pub mustard: bool,
    pub celery: bool,
    pub lupin: bool,
    pub mollusks: bool,
    pub custom_allergens: Vec<String>,
    pub severity_level: SeverityLevel,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AllergenProfile {
    /// Empty profile: no flags set, moderate severity.
    pub fn new(user_id: Uuid) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            peanuts: false,
            tree_nuts: false,
            shellfish: false,
            fish: false,
            gluten: false,
            dairy: false,
            eggs: false,
            soy: false,
            sesame: false,
            sulfites: false,
            mustard: false,
            celery: false,
            lupin: false,
            mollusks: false,
            custom_allergens: Vec::new(),
            severity_level: SeverityLevel::Moderate,
            created_at: now,
            updated_at: now,
        }
    }

    /// Flag names paired with their values, in declaration order.
    pub fn flags(&self) -> [(&'static str, bool); 14] {
        [
            ("peanuts", self.peanuts),
            ("tree_nuts", self.tree_nuts),
            ("shellfish", self.shellfish),
            ("fish", self.fish),
            ("gluten", self.gluten),
            ("dairy", self.dairy),
            ("eggs", self.eggs),
            ("soy", self.soy),
            ("sesame", self.sesame),
            ("sulfites", self.sulfites),
            ("mustard", self.mustard),
            ("celery", self.celery),
            ("lupin", self.lupin),
            ("mollusks", self.mollusks),
        ]
    }

    /// Human-readable names of every allergen the user declared: set flags
    /// (underscores become spaces) followed by the custom entries.
    pub fn active_allergens(&self) -> Vec<String> {
        self.flags()
            .iter()
            .filter(|(_, enabled)| *enabled)
            .map(|(name, _)| name.replace('_', " "))
            .chain(self.custom_allergens.iter().cloned())
            .collect()
    }

    pub fn update(&mut self, input: UpdateAllergenProfileInput) {
        let (now, _) = generate_timestamp();

        let flags = [
            (&mut self.peanuts, input.peanuts),
            (&mut self.tree_nuts, input.tree_nuts),
            (&mut self.shellfish, input.shellfish),
            (&mut self.fish, input.fish),
            (&mut self.gluten, input.gluten),
            (&mut self.dairy, input.dairy),
            (&mut self.eggs, input.eggs),
            (&mut self.soy, input.soy),
            (&mut self.sesame, input.sesame),
            (&mut self.sulfites, input.sulfites),
            (&mut self.mustard, input.mustard),
            (&mut self.celery, input.celery),
            (&mut self.lupin, input.lupin),
            (&mut self.mollusks, input.mollusks),
        ];
        for (field, value) in flags {
            if let Some(v) = value {
                *field = v;
            }
        }

        if let Some(custom) = input.custom_allergens {
            self.custom_allergens = custom
                .into_iter()
                .map(|a| a.trim().to_string())
                .filter(|a| !a.is_empty())
                .collect();
        }
        if let Some(severity) = input.severity_level {
            self.severity_level = severity;
        }
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_profile_is_empty_and_moderate() {
        let profile = AllergenProfile::new(Uuid::new_v4());
        assert!(profile.active_allergens().is_empty());
        assert_eq!(profile.severity_level, SeverityLevel::Moderate);
    }

    #[test]
    fn test_active_allergens_replaces_underscores_and_appends_custom() {
        let mut profile = AllergenProfile::new(Uuid::new_v4());
        profile.tree_nuts = true;
        profile.eggs = true;
        profile.custom_allergens = vec!["kiwi".to_string()];

        assert_eq!(
            profile.active_allergens(),
            vec!["tree nuts".to_string(), "eggs".to_string(), "kiwi".to_string()]
        );
    }

    #[test]
    fn test_update_only_touches_supplied_fields() {
        let mut profile = AllergenProfile::new(Uuid::new_v4());
        profile.peanuts = true;
        profile.custom_allergens = vec!["kiwi".to_string()];

        profile.update(UpdateAllergenProfileInput {
            dairy: Some(true),
            severity_level: Some(SeverityLevel::Severe),
            ..Default::default()
        });

        assert!(profile.peanuts);
        assert!(profile.dairy);
        assert!(!profile.gluten);
        assert_eq!(profile.custom_allergens, vec!["kiwi".to_string()]);
        assert_eq!(profile.severity_level, SeverityLevel::Severe);
    }

    #[test]
    fn test_update_can_clear_flags_and_custom_list() {
        let mut profile = AllergenProfile::new(Uuid::new_v4());
        profile.peanuts = true;
        profile.custom_allergens = vec!["kiwi".to_string()];

        profile.update(UpdateAllergenProfileInput {
            peanuts: Some(false),
            custom_allergens: Some(vec![]),
            ..Default::default()
        });

        assert!(profile.active_allergens().is_empty());
    }

    #[test]
    fn test_update_drops_blank_custom_allergens() {
        let mut profile = AllergenProfile::new(Uuid::new_v4());
        profile.update(UpdateAllergenProfileInput {
            custom_allergens: Some(vec![" kiwi ".to_string(), "  ".to_string()]),
            ..Default::default()
        });

        assert_eq!(profile.custom_allergens, vec!["kiwi".to_string()]);
    }

    #[test]
    fn test_severity_from_unknown_string_defaults_to_moderate() {
        assert_eq!(SeverityLevel::from("severe"), SeverityLevel::Severe);
        assert_eq!(SeverityLevel::from("extreme"), SeverityLevel::Moderate);
    }
}
