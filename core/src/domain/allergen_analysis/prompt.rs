use crate::domain::{
    allergen_analysis::entities::FoodInfo, allergen_profile::entities::AllergenProfile,
};

/// Builds the instruction sent to the completion service for one food.
pub fn build_analysis_prompt(profile: &AllergenProfile, food: &FoodInfo) -> String {
    let allergens = profile.active_allergens();
    let allergens = if allergens.is_empty() {
        "None specified".to_string()
    } else {
        allergens.join(", ")
    };

    let food_name = if food.name.trim().is_empty() {
        "Unknown food"
    } else {
        food.name.as_str()
    };

    let ingredients = if food.ingredients.is_empty() {
        "Not specified".to_string()
    } else {
        food.ingredients.join(", ")
    };

    let nutrition = food
        .nutrition
        .as_ref()
        .filter(|n| !n.is_empty())
        .and_then(|n| serde_json::to_string_pretty(n).ok())
        .unwrap_or_else(|| "Not available".to_string());

    format!(
        r#"You are an expert food allergen analyst. Analyze the following food for potential allergen risks for a user with specific allergies.

USER ALLERGIES: {allergens}
SEVERITY LEVEL: {severity}

FOOD INFORMATION:
- Name: {food_name}
- Ingredients: {ingredients}
- Nutrition: {nutrition}

Please provide a comprehensive allergen analysis in the following JSON format:
{{
    "is_safe": true/false,
    "risk_level": "low/medium/high/critical",
    "detected_allergens": ["list of allergens found"],
    "risk_factors": ["specific risk factors identified"],
    "recommendations": ["specific recommendations for the user"],
    "alternative_suggestions": ["safer alternative foods"],
    "confidence_score": 0.0-1.0,
    "analysis_details": "detailed explanation of the analysis"
}}

Consider:
1. Direct allergen presence in ingredients
2. Cross-contamination risks
3. Hidden allergens in processed foods
4. Severity of the user's allergies
5. Manufacturing processes that might introduce allergens
6. Alternative ingredients or preparation methods

Respond with the JSON object only. Be thorough but concise. Prioritize user safety.
"#,
        severity = profile.severity_level.as_str(),
    )
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::{allergen_profile::entities::SeverityLevel, food::entities::NutritionInfo};

    #[test]
    fn test_prompt_lists_allergens_severity_and_food() {
        let mut profile = AllergenProfile::new(Uuid::new_v4());
        profile.tree_nuts = true;
        profile.custom_allergens = vec!["kiwi".to_string()];
        profile.severity_level = SeverityLevel::Severe;

        let food = FoodInfo {
            name: "Trail Mix".to_string(),
            ingredients: vec!["almonds".to_string(), "raisins".to_string()],
            nutrition: Some(NutritionInfo {
                calories: Some(150.0),
                ..Default::default()
            }),
        };

        let prompt = build_analysis_prompt(&profile, &food);

        assert!(prompt.contains("USER ALLERGIES: tree nuts, kiwi"));
        assert!(prompt.contains("SEVERITY LEVEL: severe"));
        assert!(prompt.contains("- Name: Trail Mix"));
        assert!(prompt.contains("- Ingredients: almonds, raisins"));
        assert!(prompt.contains("\"calories\": 150.0"));
        assert!(!prompt.contains("\"protein\""));
    }

    #[test]
    fn test_prompt_placeholders_for_missing_data() {
        let profile = AllergenProfile::new(Uuid::new_v4());
        let prompt = build_analysis_prompt(&profile, &FoodInfo::default());

        assert!(prompt.contains("USER ALLERGIES: None specified"));
        assert!(prompt.contains("SEVERITY LEVEL: moderate"));
        assert!(prompt.contains("- Name: Unknown food"));
        assert!(prompt.contains("- Ingredients: Not specified"));
        assert!(prompt.contains("- Nutrition: Not available"));
    }

    #[test]
    fn test_prompt_requests_every_field_and_consideration() {
        let profile = AllergenProfile::new(Uuid::new_v4());
        let prompt = build_analysis_prompt(&profile, &FoodInfo::default());

        for field in [
            "\"is_safe\"",
            "\"risk_level\"",
            "\"detected_allergens\"",
            "\"risk_factors\"",
            "\"recommendations\"",
            "\"alternative_suggestions\"",
            "\"confidence_score\"",
            "\"analysis_details\"",
        ] {
            assert!(prompt.contains(field), "missing {field}");
        }

        for consideration in [
            "Direct allergen presence",
            "Cross-contamination",
            "Hidden allergens in processed foods",
            "Severity of the user's allergies",
            "Manufacturing processes",
            "Alternative ingredients",
        ] {
            assert!(prompt.contains(consideration), "missing {consideration}");
        }
    }
}
