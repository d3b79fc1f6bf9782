pub mod cors;
pub mod error;
pub mod health;
pub mod images;
pub mod labels;
pub mod state;
pub mod stats;

use axum::{
    Router,
    http::HeaderValue,
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;

pub use state::{AppState, AppStateInner};

/// Assemble every review route with CORS and request tracing applied.
pub fn build_router(state: AppState, allowed_origins: &[HeaderValue]) -> Router {
    Router::new()
        .route("/api/images/next", get(images::next_image))
        .route("/api/labels", post(labels::submit_label))
        .route("/api/labels/{label_id}", delete(labels::delete_label))
        .route("/api/stats", get(stats::get_stats))
        .route("/health", get(health::health))
        .layer(cors::cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
