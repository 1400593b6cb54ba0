use tracing::{instrument, warn};

use crate::domain::{
    allergen_analysis::{
        entities::{AllergenAnalysis, FoodInfo},
        parser::parse_analysis_response,
        ports::LLMClient,
        prompt::build_analysis_prompt,
        value_objects::SamplingConfig,
    },
    allergen_profile::entities::AllergenProfile,
    common::entities::app_errors::CoreError,
};

/// Prompt construction, one completion call and response parsing.
#[derive(Debug, Clone)]
pub struct AllergenAnalysisPipeline<L> {
    llm_client: L,
    sampling: SamplingConfig,
}

impl<L> AllergenAnalysisPipeline<L>
where
    L: LLMClient,
{
    pub fn new(llm_client: L) -> Self {
        Self {
            llm_client,
            sampling: SamplingConfig::default(),
        }
    }

    pub fn with_sampling(mut self, sampling: SamplingConfig) -> Self {
        self.sampling = sampling;
        self
    }

    #[instrument(skip(self, profile, food), fields(food_name = %food.name))]
    pub async fn analyze(
        &self,
        profile: &AllergenProfile,
        food: &FoodInfo,
    ) -> Result<AllergenAnalysis, CoreError> {
        let prompt = build_analysis_prompt(profile, food);

        let completion = self.llm_client.complete_text(prompt, self.sampling).await?;

        if completion.trim().is_empty() {
            return Err(CoreError::ExternalServiceError(
                "No response from LLM".to_string(),
            ));
        }

        let parsed = parse_analysis_response(&completion);
        if parsed.used_fallback {
            warn!("LLM reply held no usable JSON object, using keyword fallback");
        }

        Ok(parsed.into_analysis(food.name.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::allergen_analysis::{entities::RiskLevel, ports::MockLLMClient};
    use uuid::Uuid;

    fn food() -> FoodInfo {
        FoodInfo {
            name: "Peanut Butter Cookie".to_string(),
            ingredients: vec!["wheat flour".to_string(), "peanuts".to_string()],
            nutrition: None,
        }
    }

    #[tokio::test]
    async fn test_analyze_parses_completion() {
        let mut llm = MockLLMClient::new();
        llm.expect_complete_text()
            .withf(|prompt, sampling| {
                prompt.contains("Peanut Butter Cookie") && sampling.temperature == 0.1
            })
            .times(1)
            .returning(|_, _| {
                Box::pin(async {
                    Ok(r#"{"is_safe": false, "risk_level": "critical", "detected_allergens": ["peanuts"], "confidence_score": 0.9}"#.to_string())
                })
            });

        let pipeline = AllergenAnalysisPipeline::new(llm);
        let profile = AllergenProfile::new(Uuid::new_v4());

        let analysis = pipeline.analyze(&profile, &food()).await.unwrap();

        assert_eq!(analysis.food_name, "Peanut Butter Cookie");
        assert!(!analysis.is_safe);
        assert_eq!(analysis.risk_level, RiskLevel::Critical);
        assert_eq!(analysis.detected_allergens, vec!["peanuts".to_string()]);
        assert_eq!(analysis.confidence_score, 0.9);
    }

    #[tokio::test]
    async fn test_analyze_uses_custom_sampling() {
        let mut llm = MockLLMClient::new();
        llm.expect_complete_text()
            .withf(|_, sampling| sampling.max_output_tokens == 256 && sampling.top_k == 8)
            .returning(|_, _| Box::pin(async { Ok("looks fine".to_string()) }));

        let pipeline = AllergenAnalysisPipeline::new(llm).with_sampling(SamplingConfig {
            temperature: 0.0,
            top_k: 8,
            top_p: 0.9,
            max_output_tokens: 256,
        });

        let analysis = pipeline
            .analyze(&AllergenProfile::new(Uuid::new_v4()), &food())
            .await
            .unwrap();

        assert!(analysis.is_safe);
        assert_eq!(analysis.confidence_score, 0.5);
        assert_eq!(analysis.analysis_details, "looks fine");
    }

    #[tokio::test]
    async fn test_empty_completion_is_an_error() {
        let mut llm = MockLLMClient::new();
        llm.expect_complete_text()
            .returning(|_, _| Box::pin(async { Ok("   \n".to_string()) }));

        let pipeline = AllergenAnalysisPipeline::new(llm);
        let result = pipeline
            .analyze(&AllergenProfile::new(Uuid::new_v4()), &food())
            .await;

        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));
    }

    #[tokio::test]
    async fn test_client_errors_propagate() {
        let mut llm = MockLLMClient::new();
        llm.expect_complete_text().returning(|_, _| {
            Box::pin(async { Err(CoreError::ExternalServiceError("timeout".to_string())) })
        });

        let pipeline = AllergenAnalysisPipeline::new(llm);
        let result = pipeline
            .analyze(&AllergenProfile::new(Uuid::new_v4()), &food())
            .await;

        assert_eq!(
            result,
            Err(CoreError::ExternalServiceError("timeout".to_string()))
        );
    }
}
