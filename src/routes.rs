//! API route handlers.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::fetch;
use crate::period::Period;
use crate::stats;
use crate::types::{ErrorResponse, HealthResponse, SuggestionsQuery, SuggestionsResponse};

/// Application state shared across handlers.
pub struct AppState {
    pub config: AppConfig,
    pub client: reqwest::Client,
}

/// Error type for API handlers.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn internal(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.status.to_string(),
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Suggestions endpoint.
///
/// Each request runs its own fresh fetch, filter, and aggregation pass; no
/// computed results are shared across requests. A fetch failure shows up here
/// as an empty history and is reported as an error response, never a crash.
pub async fn suggestions(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SuggestionsQuery>,
) -> Result<Json<SuggestionsResponse>, ApiError> {
    let period = Period::parse(query.period.as_deref().unwrap_or("all"));

    let draws = fetch::fetch_draws(&state.client, &state.config.source).await;

    stats::suggestions(&draws, period)
        .map(Json)
        .ok_or_else(|| ApiError::internal("No draw data available."))
}
