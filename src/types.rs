//! Request and response types for the suggestions API.

use serde::{Deserialize, Serialize};

/// Query parameters for the suggestions endpoint.
#[derive(Debug, Deserialize)]
pub struct SuggestionsQuery {
    /// Free-form period token; absent means "all".
    pub period: Option<String>,
}

/// Suggestion response: both strategies plus the resolved period token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionsResponse {
    /// Hot-columns strategy: 5 numbers per column, concatenated in column order.
    pub strategy1: Vec<u8>,
    /// Cold-numbers strategy: the 15 least drawn numbers, ascending.
    pub strategy2: Vec<u8>,
    pub period: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
