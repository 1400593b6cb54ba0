use serde::{Deserialize, Serialize};
use utoipa::IntoParams;
use validator::Validate;

fn default_max_results() -> u32 {
    10
}

#[derive(Debug, Clone, Serialize, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct SearchFoodsParams {
    /// Food name to search for
    #[validate(length(min = 1, message = "query must not be empty"))]
    pub query: String,
    /// Maximum number of results to return
    #[serde(default = "default_max_results")]
    #[param(minimum = 1, maximum = 50, default = 10)]
    #[validate(range(min = 1, max = 50, message = "max_results must be between 1 and 50"))]
    pub max_results: u32,
}
