use super::handlers;
use super::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderName, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Analysis route, plus the path the hosted-function client calls
pub const ANALYZE_PATHS: [&str; 2] = ["/analyze-transcript", "/functions/v1/analyze-transcript"];

/// Request body cap unless `service.http.max_body_bytes` says otherwise (16 MiB)
pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    // Answers every OPTIONS request itself with an empty 200
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ]);

    let body_limit = DefaultBodyLimit::max(state.max_body_bytes);

    let mut router = Router::new()
        // Health check
        .route("/health", get(handlers::health_check));

    for path in ANALYZE_PATHS {
        router = router.route(path, post(handlers::analyze_transcript));
    }

    router
        .layer(body_limit)
        .layer(cors)
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
