use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::food::entities::{FoodDetails, NutritionInfo};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }

    /// Strict, case-insensitive; anything outside the four levels is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "low" => Some(RiskLevel::Low),
            "medium" => Some(RiskLevel::Medium),
            "high" => Some(RiskLevel::High),
            "critical" => Some(RiskLevel::Critical),
            _ => None,
        }
    }
}

/// What the analysis pipeline knows about the food being checked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodInfo {
    pub name: String,
    pub ingredients: Vec<String>,
    pub nutrition: Option<NutritionInfo>,
}

impl From<&FoodDetails> for FoodInfo {
    fn from(details: &FoodDetails) -> Self {
        Self {
            name: details.food_name.clone(),
            ingredients: details.ingredients.clone().unwrap_or_default(),
            nutrition: details.nutrition.clone().filter(|n| !n.is_empty()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AllergenAnalysis {
    pub food_name: String,
    pub is_safe: bool,
    pub risk_level: RiskLevel,
    pub detected_allergens: Vec<String>,
    pub risk_factors: Vec<String>,
    pub recommendations: Vec<String>,
    pub alternative_suggestions: Vec<String>,
    /// Always within `[0.0, 1.0]`.
    pub confidence_score: f64,
    pub analysis_details: String,
}

/// Analysis returned to the client together with the deterministic score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisReport {
    #[serde(flatten)]
    pub analysis: AllergenAnalysis,
    pub risk_score: f64,
    pub confidence_label: String,
}

pub fn confidence_label(score: f64) -> &'static str {
    match score {
        s if s >= 0.9 => "Very High",
        s if s >= 0.7 => "High",
        s if s >= 0.5 => "Medium",
        s if s >= 0.3 => "Low",
        _ => "Very Low",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_parse_is_strict() {
        assert_eq!(RiskLevel::parse(" HIGH "), Some(RiskLevel::High));
        assert_eq!(RiskLevel::parse("critical"), Some(RiskLevel::Critical));
        assert_eq!(RiskLevel::parse("moderate"), None);
    }

    #[test]
    fn test_confidence_label_bands() {
        assert_eq!(confidence_label(0.95), "Very High");
        assert_eq!(confidence_label(0.7), "High");
        assert_eq!(confidence_label(0.5), "Medium");
        assert_eq!(confidence_label(0.3), "Low");
        assert_eq!(confidence_label(0.1), "Very Low");
    }

    #[test]
    fn test_report_serializes_analysis_fields_at_top_level() {
        let report = AnalysisReport {
            analysis: AllergenAnalysis {
                food_name: "Pad Thai".to_string(),
                is_safe: false,
                risk_level: RiskLevel::High,
                detected_allergens: vec!["peanuts".to_string()],
                risk_factors: vec![],
                recommendations: vec![],
                alternative_suggestions: vec![],
                confidence_score: 0.8,
                analysis_details: String::new(),
            },
            risk_score: 0.96,
            confidence_label: "High".to_string(),
        };

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["is_safe"], serde_json::json!(false));
        assert_eq!(value["risk_level"], "high");
        assert_eq!(value["detected_allergens"][0], "peanuts");
        assert_eq!(value["risk_score"], 0.96);
        assert!(value.get("analysis").is_none());

        let back: AnalysisReport = serde_json::from_value(value).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn test_food_info_from_details_drops_empty_nutrition() {
        let details = FoodDetails {
            food_name: "Granola".to_string(),
            ingredients: Some(vec!["oats".to_string()]),
            nutrition: Some(NutritionInfo::default()),
            ..Default::default()
        };
        let info = FoodInfo::from(&details);

        assert_eq!(info.name, "Granola");
        assert_eq!(info.ingredients, vec!["oats".to_string()]);
        assert_eq!(info.nutrition, None);
    }
}
