use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{InferenceConfig, entities::app_errors::CoreError, retry::RetryPolicy},
    recommendation::ports::InferenceClient,
};

/// Client for the Hugging Face serverless inference API.
#[derive(Debug, Clone)]
pub struct HuggingFaceClient {
    api_url: String,
    api_token: String,
    retry: RetryPolicy,
    client: Client,
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Candidates(Vec<Candidate>),
    Error { error: String },
    Single(Candidate),
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    generated_text: String,
}

impl InferenceResponse {
    fn into_generated_text(self) -> Result<String, CoreError> {
        match self {
            InferenceResponse::Candidates(candidates) => candidates
                .into_iter()
                .next()
                .map(|c| c.generated_text)
                .ok_or_else(|| {
                    CoreError::ExternalServiceError(
                        "No response from inference endpoint".to_string(),
                    )
                }),
            InferenceResponse::Error { error } => {
                tracing::error!("Inference endpoint returned error payload: {}", error);
                Err(CoreError::Upstream(error))
            }
            InferenceResponse::Single(candidate) => Ok(candidate.generated_text),
        }
    }
}

impl HuggingFaceClient {
    pub fn new(config: InferenceConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                CoreError::InternalServerError(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            api_url: config.api_url,
            api_token: config.api_token,
            retry: config.retry,
            client,
        })
    }

    async fn call_inference_api(
        &self,
        request: &InferenceRequest<'_>,
        attempt: usize,
    ) -> Result<InferenceResponse, CoreError> {
        tracing::debug!("Calling inference endpoint (attempt {})", attempt);

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_token)
            .json(request)
            .send()
            .await
            .map_err(|e| CoreError::ExternalServiceError(format!("Inference API error: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(CoreError::ExternalServiceError(format!(
                "Inference API returned error: {} - {}",
                status, error_text
            )));
        }

        response.json::<InferenceResponse>().await.map_err(|e| {
            CoreError::ExternalServiceError(format!("Failed to parse inference response: {}", e))
        })
    }
}

impl InferenceClient for HuggingFaceClient {
    async fn generate(&self, prompt: String) -> Result<String, CoreError> {
        let request = InferenceRequest { inputs: &prompt };

        let response = self
            .retry
            .run(|attempt| self.call_inference_api(&request, attempt))
            .await?;

        response.into_generated_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(body: &str) -> Result<String, CoreError> {
        serde_json::from_str::<InferenceResponse>(body)
            .unwrap()
            .into_generated_text()
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(InferenceRequest { inputs: "hello" }).unwrap();
        assert_eq!(body, serde_json::json!({ "inputs": "hello" }));
    }

    #[test]
    fn test_decode_list_takes_first_candidate() {
        let body = r#"[{"generated_text": "first"}, {"generated_text": "second"}]"#;
        assert_eq!(decode(body), Ok("first".to_string()));
    }

    #[test]
    fn test_decode_single_object() {
        assert_eq!(
            decode(r#"{"generated_text": "only"}"#),
            Ok("only".to_string())
        );
    }

    #[test]
    fn test_decode_missing_text_is_empty() {
        assert_eq!(decode(r#"[{"score": 0.5}]"#), Ok(String::new()));
        assert_eq!(decode("{}"), Ok(String::new()));
    }

    #[test]
    fn test_decode_error_payload() {
        assert_eq!(
            decode(r#"{"error": "Model is currently loading"}"#),
            Err(CoreError::Upstream("Model is currently loading".to_string()))
        );
    }

    #[test]
    fn test_decode_empty_list() {
        assert!(matches!(
            decode("[]"),
            Err(CoreError::ExternalServiceError(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_exhausts_retries() {
        let mut config = InferenceConfig::new(
            "http://127.0.0.1:9/models/test".to_string(),
            "test-token".to_string(),
        );
        config.retry = RetryPolicy::fixed(3, std::time::Duration::ZERO);
        let client = HuggingFaceClient::new(config).unwrap();

        let result = client.generate("prompt".to_string()).await;

        assert_eq!(result, Err(CoreError::RetriesExhausted { attempts: 3 }));
    }
}
