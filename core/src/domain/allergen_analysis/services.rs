use tracing::{info, instrument};

use crate::domain::{
    allergen_analysis::{
        entities::{AnalysisReport, FoodInfo, confidence_label},
        ports::{AllergenAnalysisService, LLMClient},
        risk_scorer::calculate_risk_score,
        value_objects::AnalyzeAllergensInput,
    },
    allergen_profile::ports::AllergenProfileRepository,
    authentication::{ports::TokenIssuer, value_objects::Identity},
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    food::{helpers::extract_ingredients_from_text, ports::NutritionProvider},
    health::ports::HealthCheckRepository,
    scan_history::ports::ScanHistoryRepository,
    user::ports::UserRepository,
};

impl<U, AP, SH, HC, H, T, N, LLM> AllergenAnalysisService for Service<U, AP, SH, HC, H, T, N, LLM>
where
    U: UserRepository,
    AP: AllergenProfileRepository,
    SH: ScanHistoryRepository,
    HC: HealthCheckRepository,
    H: HasherRepository,
    T: TokenIssuer,
    N: NutritionProvider,
    LLM: LLMClient,
{
    #[instrument(skip(self, input), fields(user_id = %identity.user_id, food_name = %input.food.food_name))]
    async fn analyze_food_allergens(
        &self,
        identity: Identity,
        input: AnalyzeAllergensInput,
    ) -> Result<AnalysisReport, CoreError> {
        let profile = self.profile_for_user(identity.id()).await?;

        let mut food = FoodInfo::from(&input.food);
        if food.ingredients.is_empty()
            && let Some(description) = input.food.food_description.as_deref()
        {
            food.ingredients = extract_ingredients_from_text(description);
        }

        let analysis = self.analysis_pipeline.analyze(&profile, &food).await?;
        let risk_score = calculate_risk_score(&analysis.detected_allergens, &profile);

        info!(
            risk_level = analysis.risk_level.as_str(),
            risk_score, "allergen analysis completed"
        );

        Ok(AnalysisReport {
            confidence_label: confidence_label(analysis.confidence_score).to_string(),
            risk_score,
            analysis,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        allergen_analysis::entities::RiskLevel,
        allergen_profile::entities::{AllergenProfile, SeverityLevel},
        common::services::tests::ServiceMocks,
        food::entities::FoodDetails,
    };
    use uuid::Uuid;

    fn identity(user_id: Uuid) -> Identity {
        Identity {
            user_id,
            email: "user@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_analysis_report_combines_llm_and_score() {
        let user_id = Uuid::new_v4();
        let mut profile = AllergenProfile::new(user_id);
        profile.peanuts = true;
        profile.severity_level = SeverityLevel::Severe;

        let mut mocks = ServiceMocks::default();
        mocks.profiles.expect_get_by_user_id().returning(move |_| {
            let profile = profile.clone();
            Box::pin(async move { Ok(Some(profile)) })
        });
        mocks
            .llm
            .expect_complete_text()
            .withf(|prompt, _| prompt.contains("peanuts") && prompt.contains("SEVERITY LEVEL: severe"))
            .returning(|_, _| {
                Box::pin(async {
                    Ok(r#"{"is_safe": false, "risk_level": "critical", "detected_allergens": ["peanuts"], "confidence_score": 0.95}"#.to_string())
                })
            });
        let service = mocks.build();

        let report = service
            .analyze_food_allergens(
                identity(user_id),
                AnalyzeAllergensInput {
                    food: FoodDetails {
                        food_name: "Satay".to_string(),
                        ingredients: Some(vec!["peanuts".to_string(), "chicken".to_string()]),
                        ..Default::default()
                    },
                },
            )
            .await
            .unwrap();

        assert_eq!(report.analysis.risk_level, RiskLevel::Critical);
        assert_eq!(report.risk_score, 1.0);
        assert_eq!(report.confidence_label, "Very High");
    }

    #[tokio::test]
    async fn test_description_fills_missing_ingredients() {
        let user_id = Uuid::new_v4();

        let mut mocks = ServiceMocks::default();
        mocks
            .profiles
            .expect_get_by_user_id()
            .returning(move |_| Box::pin(async move { Ok(Some(AllergenProfile::new(user_id))) }));
        mocks
            .llm
            .expect_complete_text()
            .withf(|prompt, _| prompt.contains("oats, honey"))
            .returning(|_, _| Box::pin(async { Ok("safe to eat".to_string()) }));
        let service = mocks.build();

        let report = service
            .analyze_food_allergens(
                identity(user_id),
                AnalyzeAllergensInput {
                    food: FoodDetails {
                        food_name: "Granola".to_string(),
                        food_description: Some("oats, honey".to_string()),
                        ..Default::default()
                    },
                },
            )
            .await
            .unwrap();

        assert_eq!(report.risk_score, 0.0);
        assert_eq!(report.confidence_label, "Medium");
    }

    #[tokio::test]
    async fn test_llm_failure_surfaces() {
        let user_id = Uuid::new_v4();

        let mut mocks = ServiceMocks::default();
        mocks
            .profiles
            .expect_get_by_user_id()
            .returning(move |_| Box::pin(async move { Ok(Some(AllergenProfile::new(user_id))) }));
        mocks.llm.expect_complete_text().returning(|_, _| {
            Box::pin(async { Err(CoreError::ExternalServiceError("quota".to_string())) })
        });
        let service = mocks.build();

        let result = service
            .analyze_food_allergens(
                identity(user_id),
                AnalyzeAllergensInput {
                    food: FoodDetails::default(),
                },
            )
            .await;

        assert_eq!(
            result,
            Err(CoreError::ExternalServiceError("quota".to_string()))
        );
    }
}
