//! REST API router and configuration.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{
    bulk_by_id_handler, bulk_search_handler, derived_handler, find_handler,
    get_word_by_id_handler, search_handler, ApiState,
};
use crate::config::ServerConfig;
use crate::dictionary::WordResolver;

/// REST API configuration.
#[derive(Debug, Clone)]
pub struct RestApiConfig {
    /// Enable CORS.
    pub enable_cors: bool,
    /// API prefix (e.g., "/api/v1"). Empty mounts routes at the root.
    pub prefix: String,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            enable_cors: true,
            prefix: String::new(),
        }
    }
}

impl From<&ServerConfig> for RestApiConfig {
    fn from(server: &ServerConfig) -> Self {
        Self {
            enable_cors: server.enable_cors,
            prefix: server.prefix.clone(),
        }
    }
}

/// Create the REST API router.
///
/// Endpoints (relative to the prefix):
/// - GET  /find?query=...    - Derivative forms matching a surface string
/// - GET  /id?id=...         - Word by id
/// - GET  /derived?id=...    - Derivative forms of a word
/// - GET  /search?query=...  - Derivative-first search with name fallback
/// - POST /bulk              - Search many queries, skipping failures
/// - POST /bulkById          - Words and forms for many ids, all or nothing
/// - GET  /health            - Liveness
/// - GET  /api               - Endpoint listing
pub fn create_rest_router(resolver: Arc<WordResolver>, config: &RestApiConfig) -> Router {
    let state = Arc::new(ApiState::new(resolver));

    let api_routes = Router::new()
        .route("/find", get(find_handler))
        .route("/id", get(get_word_by_id_handler))
        .route("/derived", get(derived_handler))
        .route("/search", get(search_handler))
        .route("/bulk", post(bulk_search_handler))
        .route("/bulkById", post(bulk_by_id_handler))
        .route("/health", get(health_handler))
        .route("/api", get(api_info_handler))
        .with_state(state);

    // Axum refuses to nest at the root.
    let prefix = config.prefix.trim_matches('/');
    let router = if prefix.is_empty() {
        api_routes
    } else {
        Router::new().nest(&format!("/{}", prefix), api_routes)
    };

    let router = router.layer(TraceLayer::new_for_http());

    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
            .allow_origin(Any);

        router.layer(cors)
    } else {
        router
    }
}

async fn health_handler() -> &'static str {
    "OK"
}

async fn api_info_handler(State(state): State<Arc<ApiState>>) -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "name": "bgdict",
        "version": env!("CARGO_PKG_VERSION"),
        "backend": state.resolver.backend_name(),
        "description": "Dictionary lookup of base words and derivative forms",
        "endpoints": {
            "find": {
                "method": "GET",
                "path": "/find",
                "params": { "query": "Surface form (required)" }
            },
            "id": {
                "method": "GET",
                "path": "/id",
                "params": { "id": "Word id (required)" }
            },
            "derived": {
                "method": "GET",
                "path": "/derived",
                "params": { "id": "Base word id (required)" }
            },
            "search": {
                "method": "GET",
                "path": "/search",
                "params": { "query": "Word or inflected form (required)" }
            },
            "bulk": {
                "method": "POST",
                "path": "/bulk",
                "body": { "queries": ["string"] }
            },
            "bulkById": {
                "method": "POST",
                "path": "/bulkById",
                "body": { "queries": ["integer"] }
            }
        }
    }))
}
