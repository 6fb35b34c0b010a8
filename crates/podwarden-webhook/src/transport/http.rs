//! Admission endpoint handlers.
//!
//! Responsibilities:
//! - Reject empty bodies and non-JSON content types up front (cheap checks
//!   before any parsing)
//! - Decode the AdmissionReview envelope exactly once
//! - Hand off to the review pipeline and serialize its response
//!
//! An envelope that fails to parse still gets a well-formed review body with
//! an internal-error decision; only response serialization itself degrades to
//! a plain HTTP error for that single request.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};

use podwarden_core::protocol::review::AdmissionReview;
use podwarden_core::WardenError;

use crate::app_state::AppState;
use crate::policy::Decision;
use crate::review::{self, ReviewPath};

pub async fn mutate(State(app): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    handle(app, ReviewPath::Mutate, headers, body)
}

pub async fn validate(State(app): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    handle(app, ReviewPath::Validate, headers, body)
}

fn handle(app: AppState, path: ReviewPath, headers: HeaderMap, body: Bytes) -> Response {
    if body.is_empty() {
        tracing::warn!(path = path.as_str(), "empty data body");
        return (StatusCode::BAD_REQUEST, "empty data body").into_response();
    }

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    if content_type != "application/json" {
        tracing::warn!(path = path.as_str(), content_type, "invalid content-type");
        return (
            StatusCode::BAD_REQUEST,
            "content-type invalid, expect application/json",
        )
            .into_response();
    }

    let metrics = app.metrics();
    metrics.reviews_total.inc(&[("path", path.as_str())]);

    let out = match serde_json::from_slice::<AdmissionReview>(&body) {
        Ok(inbound) => {
            let decision = review::route(path, &inbound, app.mutation(), app.validation());
            metrics
                .decisions_total
                .inc(&[("path", path.as_str()), ("outcome", outcome_label(&decision))]);
            review::assemble(&inbound, decision)
        }
        Err(e) => {
            tracing::error!(path = path.as_str(), error = %e, "cannot decode review envelope");
            metrics.decode_errors_total.inc(&[("path", path.as_str())]);
            review::parse_failure(&WardenError::Internal(e.to_string()))
        }
    };

    match serde_json::to_vec(&out) {
        Ok(bytes) => (
            [(header::CONTENT_TYPE, "application/json")],
            bytes,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "cannot encode response");
            (StatusCode::BAD_REQUEST, format!("cannot encode response: {e}")).into_response()
        }
    }
}

fn outcome_label(decision: &Decision) -> &'static str {
    match decision {
        Decision::Allow => "allowed",
        Decision::AllowWithPatch(_) => "patched",
        Decision::Deny { .. } => "denied",
    }
}
