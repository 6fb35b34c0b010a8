//! Axum router wiring.
//!
//! Admission endpoints (`/mutate`, `/validate`) plus the ops surface.

use axum::routing::{get, post};
use axum::Router;

use crate::{app_state::AppState, ops, transport};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/mutate", post(transport::http::mutate))
        .route("/validate", post(transport::http::validate))
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics))
        .with_state(state)
}
