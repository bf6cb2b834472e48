//! Axum router — maps all URL paths to handlers.

use crate::handlers::analyze::{index, run_analysis};
use crate::handlers::download::download_report;
use crate::state::{AppState, SharedState};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        .route("/", get(index))
        .route("/run", post(run_analysis))
        .route("/output.csv", get(download_report))
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
