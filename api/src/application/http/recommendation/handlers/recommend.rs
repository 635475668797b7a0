use axum::extract::State;
use nutriplan_core::domain::recommendation::{
    entities::Recommendation, ports::RecommendationService,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    recommendation::validators::RecommendationForm,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateForm},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecommendResponse {
    pub data: Recommendation,
}

#[utoipa::path(
    post,
    path = "/recommend",
    tag = "recommendation",
    summary = "Recommend meals, restaurants and workouts",
    description = "Builds a prompt from the submitted profile, asks the inference endpoint for recommendations and extracts the four lists from its answer.",
    request_body(content = RecommendationForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, body = RecommendResponse),
        (status = 400, description = "A required field is missing", body = String),
        (status = 502, description = "The inference endpoint failed", body = String),
        (status = 500, description = "Unexpected failure", body = String)
    )
)]
pub async fn recommend(
    State(state): State<AppState>,
    ValidateForm(payload): ValidateForm<RecommendationForm>,
) -> Result<Response<RecommendResponse>, ApiError> {
    tracing::debug!("Form data received: {:?}", payload);

    let recommendation = state
        .service
        .recommend(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RecommendResponse {
        data: recommendation,
    }))
}
