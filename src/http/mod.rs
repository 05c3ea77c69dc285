//! HTTP API for transcript analysis
//!
//! - POST /analyze-transcript - Summarize a transcript and generate a diagram
//! - OPTIONS /analyze-transcript - CORS preflight (handled by CorsLayer)
//! - GET /health - Health check
//!
//! The analysis routes are also mounted under /functions/v1/.

mod handlers;
mod routes;
mod state;

pub use handlers::AnalyzeRequest;
pub use routes::{create_router, ANALYZE_PATHS, DEFAULT_MAX_BODY_BYTES};
pub use state::AppState;
