use std::time::Duration;

use clap::Parser;
use nutriplan_core::domain::common::{
    DEFAULT_INFERENCE_URL, InferenceConfig, NutriplanConfig, retry::RetryPolicy,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "nutriplan", version, about = "Diet and workout recommendations")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub inference: InferenceArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "PORT", default_value_t = 5001)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5001"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct InferenceArgs {
    #[arg(long = "inference-api-url", env = "INFERENCE_API_URL", default_value = DEFAULT_INFERENCE_URL)]
    pub api_url: String,

    #[arg(long = "inference-api-token", env = "INFERENCE_API_TOKEN", hide_env_values = true)]
    pub api_token: String,

    /// Per-attempt request timeout
    #[arg(long = "inference-timeout-secs", env = "INFERENCE_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    #[arg(long = "inference-max-attempts", env = "INFERENCE_MAX_ATTEMPTS", default_value_t = 3)]
    pub max_attempts: usize,

    /// Constant delay between attempts
    #[arg(
        long = "inference-retry-delay-secs",
        env = "INFERENCE_RETRY_DELAY_SECS",
        default_value_t = 5
    )]
    pub retry_delay_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    /// Used when RUST_LOG is not set
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for NutriplanConfig {
    fn from(args: Args) -> Self {
        let inference = args.inference;

        NutriplanConfig {
            inference: InferenceConfig {
                api_url: inference.api_url,
                api_token: inference.api_token,
                timeout: Duration::from_secs(inference.timeout_secs),
                retry: RetryPolicy::fixed(
                    inference.max_attempts,
                    Duration::from_secs(inference.retry_delay_secs),
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["nutriplan", "--inference-api-token", "hf_test"]).unwrap();

        assert_eq!(args.inference.api_url, DEFAULT_INFERENCE_URL);
        assert_eq!(args.inference.max_attempts, 3);

        let config = NutriplanConfig::from(args);
        assert_eq!(config.inference.api_token, "hf_test");
        assert_eq!(config.inference.timeout, Duration::from_secs(30));
        assert_eq!(config.inference.retry.max_attempts, 3);
        assert_eq!(config.inference.retry.delay, Duration::from_secs(5));
    }

    #[test]
    fn test_allowed_origins_are_comma_separated() {
        let args = Args::try_parse_from([
            "nutriplan",
            "--inference-api-token",
            "hf_test",
            "--allowed-origins",
            "http://a.test,http://b.test",
        ])
        .unwrap();

        assert_eq!(
            args.server.allowed_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }
}
