use crate::domain::allergen_profile::entities::{AllergenProfile, SeverityLevel};

const SEVERE_MULTIPLIER: f64 = 1.2;
const MILD_MULTIPLIER: f64 = 0.8;

/// Deterministic risk score in `[0.0, 1.0]` for a set of detected allergens.
///
/// A detected allergen counts as a match when it contains, or is contained
/// by, one of the user's allergen names (case-insensitive). The score is the
/// share of matched detections, scaled by the user's severity. Matching is
/// literal: "milk" does not match "dairy".
pub fn calculate_risk_score(detected_allergens: &[String], profile: &AllergenProfile) -> f64 {
    if detected_allergens.is_empty() {
        return 0.0;
    }

    let user_allergens: Vec<String> = profile
        .active_allergens()
        .iter()
        .map(|a| a.to_lowercase())
        .collect();

    let matches = detected_allergens
        .iter()
        .map(|d| d.to_lowercase())
        .filter(|detected| {
            user_allergens
                .iter()
                .any(|user| detected.contains(user.as_str()) || user.contains(detected.as_str()))
        })
        .count();

    let base = matches as f64 / detected_allergens.len() as f64;

    let adjusted = match profile.severity_level {
        SeverityLevel::Severe => (base * SEVERE_MULTIPLIER).min(1.0),
        SeverityLevel::Mild => (base * MILD_MULTIPLIER).max(0.0),
        SeverityLevel::Moderate => base,
    };

    adjusted.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn profile(severity: SeverityLevel) -> AllergenProfile {
        let mut profile = AllergenProfile::new(Uuid::new_v4());
        profile.severity_level = severity;
        profile
    }

    fn detected(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_detection_scores_zero_for_any_profile() {
        for severity in [SeverityLevel::Mild, SeverityLevel::Moderate, SeverityLevel::Severe] {
            let mut p = profile(severity);
            p.peanuts = true;
            p.custom_allergens = vec!["kiwi".to_string()];
            assert_eq!(calculate_risk_score(&[], &p), 0.0);
        }
    }

    #[test]
    fn test_dairy_does_not_match_milk_literally() {
        let mut p = profile(SeverityLevel::Moderate);
        p.dairy = true;

        assert_eq!(calculate_risk_score(&detected(&["milk", "soy"]), &p), 0.0);
    }

    #[test]
    fn test_severe_single_match_is_capped_at_one() {
        let mut p = profile(SeverityLevel::Severe);
        p.peanuts = true;

        assert_eq!(calculate_risk_score(&detected(&["peanuts"]), &p), 1.0);
    }

    #[test]
    fn test_substring_match_both_directions_case_insensitive() {
        let mut p = profile(SeverityLevel::Moderate);
        p.tree_nuts = true;
        p.custom_allergens = vec!["Roasted Sesame Oil".to_string()];

        // "Tree Nuts (almond)" contains "tree nuts"; "sesame" is contained in the custom entry.
        let score = calculate_risk_score(&detected(&["Tree Nuts (almond)", "SESAME", "salt"]), &p);
        assert!((score - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_each_detection_counts_once() {
        let mut p = profile(SeverityLevel::Moderate);
        p.fish = true;
        p.shellfish = true;

        // "shellfish" matches both "fish" and "shellfish" but is one detection.
        assert_eq!(calculate_risk_score(&detected(&["shellfish", "rice"]), &p), 0.5);
    }

    #[test]
    fn test_severity_ordering_and_bounds() {
        let cases = [
            detected(&["peanuts"]),
            detected(&["peanuts", "wheat"]),
            detected(&["peanuts", "wheat", "sugar"]),
            detected(&["wheat"]),
        ];

        for case in cases {
            let mut mild = profile(SeverityLevel::Mild);
            let mut moderate = profile(SeverityLevel::Moderate);
            let mut severe = profile(SeverityLevel::Severe);
            mild.peanuts = true;
            moderate.peanuts = true;
            severe.peanuts = true;

            let mild = calculate_risk_score(&case, &mild);
            let moderate = calculate_risk_score(&case, &moderate);
            let severe = calculate_risk_score(&case, &severe);

            assert!(severe >= moderate);
            assert!(mild <= moderate);
            assert!(severe <= 1.0);
            assert!(mild >= 0.0);
        }
    }

    #[test]
    fn test_mild_scales_down() {
        let mut p = profile(SeverityLevel::Mild);
        p.eggs = true;

        let score = calculate_risk_score(&detected(&["eggs", "flour"]), &p);
        assert!((score - 0.4).abs() < 1e-9);
    }
}
