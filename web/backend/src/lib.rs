pub mod error;
pub mod handlers;
pub mod models;
pub mod state;

use axum::{Router, routing::get};
use state::AppState;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/recommendations", get(handlers::get_recommendations))
        .route("/api/graph", get(handlers::get_graph))
        .route("/api/stats", get(handlers::get_stats))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}
