use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("Failed after {attempts} attempts.")]
    RetriesExhausted { attempts: usize },

    #[error("{0}")]
    Upstream(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("{0}")]
    InternalServerError(String),
}

impl CoreError {
    /// Failures caused by the inference endpoint rather than by the caller or by us.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            CoreError::RetriesExhausted { .. }
                | CoreError::Upstream(_)
                | CoreError::ExternalServiceError(_)
        )
    }
}
