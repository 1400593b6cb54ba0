use serde::{Deserialize, Deserializer, de::DeserializeOwned};

use crate::domain::allergen_analysis::entities::{AllergenAnalysis, RiskLevel};

pub const FALLBACK_RISK_FACTOR: &str = "Unable to parse detailed analysis";
pub const FALLBACK_RECOMMENDATION: &str = "Please review ingredients manually";
pub const DEFAULT_CONFIDENCE: f64 = 0.5;

/// Analysis fields as far as they could be read from a completion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedAnalysis {
    pub is_safe: Option<bool>,
    pub risk_level: Option<RiskLevel>,
    pub detected_allergens: Option<Vec<String>>,
    pub risk_factors: Option<Vec<String>>,
    pub recommendations: Option<Vec<String>>,
    pub alternative_suggestions: Option<Vec<String>>,
    pub confidence_score: Option<f64>,
    pub analysis_details: Option<String>,
    /// Set when the reply held no usable JSON object and keyword cues were used.
    pub used_fallback: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawAnalysis {
    #[serde(deserialize_with = "lenient")]
    is_safe: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    risk_level: Option<String>,
    #[serde(deserialize_with = "lenient")]
    detected_allergens: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient")]
    risk_factors: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient")]
    recommendations: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient")]
    alternative_suggestions: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient")]
    confidence_score: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    analysis_details: Option<String>,
}

/// A field of the wrong type reads as absent instead of failing the object.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

impl ParsedAnalysis {
    /// Fills every unread field with its default and enforces the value ranges.
    pub fn into_analysis(self, food_name: impl Into<String>) -> AllergenAnalysis {
        AllergenAnalysis {
            food_name: food_name.into(),
            is_safe: self.is_safe.unwrap_or(true),
            risk_level: self.risk_level.unwrap_or_default(),
            detected_allergens: self.detected_allergens.unwrap_or_default(),
            risk_factors: self.risk_factors.unwrap_or_default(),
            recommendations: self.recommendations.unwrap_or_default(),
            alternative_suggestions: self.alternative_suggestions.unwrap_or_default(),
            confidence_score: self
                .confidence_score
                .filter(|c| c.is_finite())
                .unwrap_or(DEFAULT_CONFIDENCE)
                .clamp(0.0, 1.0),
            analysis_details: self.analysis_details.unwrap_or_default(),
        }
    }
}

/// Reads a completion reply.
///
/// The text between the first `{` and the last `}` is decoded as a JSON
/// object, field by field: a mistyped field takes its default while the
/// others are kept. When there is no such span, or it is not valid JSON, the
/// reply is classified from keyword cues instead. This never fails.
pub fn parse_analysis_response(content: &str) -> ParsedAnalysis {
    extract_json_object(content)
        .and_then(|json| serde_json::from_str::<RawAnalysis>(json).ok())
        .map(ParsedAnalysis::from)
        .unwrap_or_else(|| fallback_parse(content))
}

fn extract_json_object(content: &str) -> Option<&str> {
    let start = content.find('{')?;
    let end = content.rfind('}')?;

    (start < end).then(|| &content[start..=end])
}

impl From<RawAnalysis> for ParsedAnalysis {
    fn from(raw: RawAnalysis) -> Self {
        Self {
            is_safe: raw.is_safe,
            risk_level: raw.risk_level.as_deref().and_then(RiskLevel::parse),
            detected_allergens: raw.detected_allergens,
            risk_factors: raw.risk_factors,
            recommendations: raw.recommendations,
            alternative_suggestions: raw.alternative_suggestions,
            confidence_score: raw.confidence_score,
            analysis_details: raw.analysis_details,
            used_fallback: false,
        }
    }
}

fn fallback_parse(content: &str) -> ParsedAnalysis {
    let lower = content.to_lowercase();

    let is_safe = !(lower.contains("unsafe") || lower.contains("dangerous"));

    let risk_level = if lower.contains("critical") || lower.contains("severe") {
        RiskLevel::Critical
    } else if lower.contains("high") {
        RiskLevel::High
    } else if lower.contains("medium") {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    ParsedAnalysis {
        is_safe: Some(is_safe),
        risk_level: Some(risk_level),
        detected_allergens: Some(Vec::new()),
        risk_factors: Some(vec![FALLBACK_RISK_FACTOR.to_string()]),
        recommendations: Some(vec![FALLBACK_RECOMMENDATION.to_string()]),
        alternative_suggestions: Some(Vec::new()),
        confidence_score: Some(DEFAULT_CONFIDENCE),
        analysis_details: Some(content.to_string()),
        used_fallback: true,
    }
}
