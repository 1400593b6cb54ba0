use std::future::Future;

use crate::domain::{
    allergen_analysis::{
        entities::AnalysisReport,
        value_objects::{AnalyzeAllergensInput, SamplingConfig},
    },
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
};

/// Generative text completion service.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn complete_text(
        &self,
        prompt: String,
        sampling: SamplingConfig,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait AllergenAnalysisService: Send + Sync {
    fn analyze_food_allergens(
        &self,
        identity: Identity,
        input: AnalyzeAllergensInput,
    ) -> impl Future<Output = Result<AnalysisReport, CoreError>> + Send;
}
