use axum::{Router, http::StatusCode, routing::get};

use crate::application::http::server::app_state::AppState;

async fn live() -> StatusCode {
    StatusCode::OK
}

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(&format!("{}/health/live", root_path), get(live))
}
