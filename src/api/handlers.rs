//! REST API request handlers.

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::dictionary::{WordResolver, WordResult, WordWithDerivatives};
use crate::error::DictError;

/// Application state shared across handlers.
pub struct ApiState {
    /// Resolver for all lookups.
    pub resolver: Arc<WordResolver>,
}

impl ApiState {
    /// Create new API state.
    pub fn new(resolver: Arc<WordResolver>) -> Self {
        Self { resolver }
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// `?query=` parameter.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryParams {
    #[serde(default)]
    pub query: Option<String>,
}

/// `?id=` parameter, parsed by the handler so bad input gets our error body.
#[derive(Debug, Clone, Deserialize)]
pub struct IdParams {
    #[serde(default)]
    pub id: Option<String>,
}

/// Bulk search request.
#[derive(Debug, Clone, Deserialize)]
pub struct BulkSearchRequest {
    pub queries: Vec<String>,
}

/// Bulk by-id request.
#[derive(Debug, Clone, Deserialize)]
pub struct BulkByIdRequest {
    pub queries: Vec<i32>,
}

/// Bulk search response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkSearchResponse {
    pub results: Vec<WordResult>,
}

/// Bulk by-id response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkByIdResponse {
    pub results: Vec<WordWithDerivatives>,
}

/// Error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

fn bad_request(error: impl Into<String>, code: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: error.into(),
            code: code.to_string(),
        }),
    )
        .into_response()
}

fn error_response(err: DictError, failure_code: &str) -> Response {
    let (status, code) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "not_found")
    } else {
        (StatusCode::INTERNAL_SERVER_ERROR, failure_code)
    };

    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
            code: code.to_string(),
        }),
    )
        .into_response()
}

fn required_query(params: QueryParams) -> Result<String, Response> {
    match params.query {
        Some(q) if !q.is_empty() => Ok(q),
        _ => Err(bad_request(
            "A suitable query was not provided.",
            "missing_query",
        )),
    }
}

fn required_id(params: IdParams) -> Result<i32, Response> {
    params
        .id
        .as_deref()
        .and_then(|id| id.trim().parse().ok())
        .ok_or_else(|| bad_request("No suitable id was provided.", "missing_id"))
}

// ============================================================================
// Handler Functions
// ============================================================================

/// GET /find - Derivative forms matching a surface string.
pub async fn find_handler(
    State(state): State<Arc<ApiState>>,
    Query(params): Query<QueryParams>,
) -> Response {
    let query = match required_query(params) {
        Ok(q) => q,
        Err(response) => return response,
    };

    match state.resolver.find_derivative_matches(&query).await {
        Ok(forms) => (StatusCode::OK, Json(forms)).into_response(),
        Err(e) => error_response(e, "find_failed"),
    }
}

/// GET /id - A single word by id.
pub async fn get_word_by_id_handler(
    State(state): State<Arc<ApiState>>,
    Query(params): Query<IdParams>,
) -> Response {
    let id = match required_id(params) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.resolver.resolve_by_id(id).await {
        Ok(word) => (StatusCode::OK, Json(word)).into_response(),
        Err(e) => error_response(e, "get_failed"),
    }
}

/// GET /derived - Derivative forms of a word.
pub async fn derived_handler(
    State(state): State<Arc<ApiState>>,
    Query(params): Query<IdParams>,
) -> Response {
    let id = match required_id(params) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.resolver.resolve_derived_forms_of(id).await {
        Ok(forms) => (StatusCode::OK, Json(forms)).into_response(),
        Err(e) => error_response(e, "derived_failed"),
    }
}

/// GET /search - Full fallback resolution of one query.
pub async fn search_handler(
    State(state): State<Arc<ApiState>>,
    Query(params): Query<QueryParams>,
) -> Response {
    let query = match required_query(params) {
        Ok(q) => q,
        Err(response) => return response,
    };

    match state.resolver.resolve_by_query(&query).await {
        Ok(results) => (StatusCode::OK, Json(results)).into_response(),
        Err(e) => error_response(e, "search_failed"),
    }
}

/// POST /bulk - Best-effort search over many queries.
pub async fn bulk_search_handler(
    State(state): State<Arc<ApiState>>,
    body: Result<Json<BulkSearchRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => return bad_request(rejection.body_text(), "invalid_body"),
    };

    let results = state.resolver.resolve_many_by_query(request.queries).await;
    (StatusCode::OK, Json(BulkSearchResponse { results })).into_response()
}

/// POST /bulkById - All-or-nothing lookup of many ids with derivative forms.
pub async fn bulk_by_id_handler(
    State(state): State<Arc<ApiState>>,
    body: Result<Json<BulkByIdRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => return bad_request(rejection.body_text(), "invalid_body"),
    };

    match state.resolver.resolve_many_by_id(request.queries).await {
        Ok(results) => (StatusCode::OK, Json(BulkByIdResponse { results })).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Bulk by-id lookup aborted");
            error_response(e, "bulk_by_id_failed")
        }
    }
}
