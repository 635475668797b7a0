use std::time::Duration;

use crate::domain::common::retry::RetryPolicy;

pub mod entities;
pub mod retry;
pub mod services;

pub const DEFAULT_INFERENCE_URL: &str =
    "https://api-inference.huggingface.co/models/tiiuae/falcon-7b-instruct";

#[derive(Clone, Debug)]
pub struct NutriplanConfig {
    pub inference: InferenceConfig,
}

#[derive(Clone, Debug)]
pub struct InferenceConfig {
    pub api_url: String,
    pub api_token: String,
    pub timeout: Duration,
    pub retry: RetryPolicy,
}

impl InferenceConfig {
    pub fn new(api_url: String, api_token: String) -> Self {
        Self {
            api_url,
            api_token,
            timeout: Duration::from_secs(30),
            retry: RetryPolicy::default(),
        }
    }
}
