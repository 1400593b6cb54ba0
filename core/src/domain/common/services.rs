use crate::domain::allergen_analysis::pipeline::AllergenAnalysisPipeline;

/// Application service. Every `*Service` trait of the domain is implemented
/// on this struct, parameterised over the adapters it drives.
#[derive(Clone)]
pub struct Service<U, AP, SH, HC, H, T, N, LLM> {
    pub(crate) user_repository: U,
    pub(crate) allergen_profile_repository: AP,
    pub(crate) scan_history_repository: SH,
    pub(crate) health_check_repository: HC,
    pub(crate) hasher_repository: H,
    pub(crate) token_issuer: T,
    pub(crate) nutrition_provider: N,
    pub(crate) analysis_pipeline: AllergenAnalysisPipeline<LLM>,
}

impl<U, AP, SH, HC, H, T, N, LLM> Service<U, AP, SH, HC, H, T, N, LLM> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repository: U,
        allergen_profile_repository: AP,
        scan_history_repository: SH,
        health_check_repository: HC,
        hasher_repository: H,
        token_issuer: T,
        nutrition_provider: N,
        analysis_pipeline: AllergenAnalysisPipeline<LLM>,
    ) -> Self {
        Self {
            user_repository,
            allergen_profile_repository,
            scan_history_repository,
            health_check_repository,
            hasher_repository,
            token_issuer,
            nutrition_provider,
            analysis_pipeline,
        }
    }
}
