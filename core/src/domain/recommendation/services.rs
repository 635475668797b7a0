use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    recommendation::{
        entities::Recommendation,
        extractor::extract_recommendation,
        ports::{InferenceClient, RecommendationService},
        prompt::build_prompt,
        value_objects::RecommendationInput,
    },
};

impl<IC> RecommendationService for Service<IC>
where
    IC: InferenceClient,
{
    #[instrument(skip(self, input))]
    async fn recommend(&self, input: RecommendationInput) -> Result<Recommendation, CoreError> {
        // 1. Reject incomplete forms before any network call
        let profile = input.validate()?;

        // 2. Build prompt
        let prompt = build_prompt(&profile);

        // 3. Call the inference endpoint
        let generated_text = self.inference_client.generate(prompt.clone()).await?;
        tracing::debug!("Generated text: {}", generated_text);

        // 4. Some models echo the prompt back before the completion
        let completion = generated_text
            .strip_prefix(prompt.as_str())
            .unwrap_or(&generated_text);

        Ok(extract_recommendation(completion, &profile.region))
    }
}
