use axum::{
    extract::{Form, FromRequest, Request, rejection::FormRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use nutriplan_core::domain::common::entities::app_errors::CoreError;
use serde::de::DeserializeOwned;
use thiserror::Error;
use validator::Validate;

/// User-facing failure. Rendered as a plain-text body prefixed with "❌".
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Please fill in all required fields.")]
    MissingFields,

    #[error("An error occurred: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    InternalServerError(String),

    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingFields | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::MissingFields(fields) => {
                tracing::debug!("Rejected form, missing fields: {:?}", fields);
                ApiError::MissingFields
            }
            error if error.is_upstream() => {
                tracing::error!("Upstream failure: {}", error);
                ApiError::Upstream(error.to_string())
            }
            error => {
                tracing::error!("Exception in recommend route: {}", error);
                ApiError::InternalServerError(error.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), format!("❌ {}", self)).into_response()
    }
}

/// Form extractor that runs `validator` rules before the handler sees the payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateForm<T>(pub T);

impl<T, S> FromRequest<S> for ValidateForm<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Form<T>: FromRequest<S, Rejection = FormRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        value.validate().map_err(|errors| {
            tracing::debug!("Form validation failed: {}", errors);
            ApiError::MissingFields
        })?;

        Ok(ValidateForm(value))
    }
}
