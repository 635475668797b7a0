use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recommendation::{entities::Recommendation, value_objects::RecommendationInput},
};

/// Text-generation endpoint turning a prompt into free-form text.
#[cfg_attr(test, mockall::automock)]
pub trait InferenceClient: Send + Sync {
    fn generate(&self, prompt: String) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for the recommendation flow
pub trait RecommendationService: Send + Sync {
    fn recommend(
        &self,
        input: RecommendationInput,
    ) -> impl Future<Output = Result<Recommendation, CoreError>> + Send;
}
