use serde::Serialize;

use crate::domain::food::entities::FoodDetails;

/// Sampling settings sent with every completion request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SamplingConfig {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl Default for SamplingConfig {
    /// Low-randomness settings used for allergen analysis.
    fn default() -> Self {
        Self {
            temperature: 0.1,
            top_k: 32,
            top_p: 1.0,
            max_output_tokens: 1024,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnalyzeAllergensInput {
    pub food: FoodDetails,
}
