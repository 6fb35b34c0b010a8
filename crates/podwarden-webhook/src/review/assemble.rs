//! Outbound envelope assembly.

use podwarden_core::protocol::patch;
use podwarden_core::protocol::review::{
    AdmissionResponse, AdmissionReview, API_VERSION, KIND_ADMISSION_REVIEW,
};
use podwarden_core::WardenError;

use crate::policy::Decision;

/// Build the response envelope for a parsed request.
///
/// `apiVersion`/`kind` are copied from the request verbatim, and the
/// sub-request's correlation id is echoed into the response. Patch encoding
/// failure degrades to a deny for this request instead of dropping the
/// response.
pub fn assemble(review: &AdmissionReview, decision: Decision) -> AdmissionReview {
    let uid = review
        .request
        .as_ref()
        .map(|r| r.uid.clone())
        .unwrap_or_default();

    let response = match decision {
        Decision::Allow => AdmissionResponse::allowed(uid),
        Decision::AllowWithPatch(ops) => match patch::encode(&ops) {
            Ok(bytes) => AdmissionResponse::allowed_with_patch(uid, bytes),
            Err(e) => AdmissionResponse::denied(uid, e.status_code(), e.to_string()),
        },
        Decision::Deny { code, message } => AdmissionResponse::denied(uid, code, message),
    };

    AdmissionReview {
        api_version: review.api_version.clone(),
        kind: review.kind.clone(),
        request: None,
        response: Some(response),
    }
}

/// Response for an envelope that never parsed. There is nothing to echo, so
/// the canonical header stands in and the decision carries the parse error;
/// admission callers need a well-formed body even on internal failure.
pub fn parse_failure(err: &WardenError) -> AdmissionReview {
    AdmissionReview {
        api_version: API_VERSION.to_string(),
        kind: KIND_ADMISSION_REVIEW.to_string(),
        request: None,
        response: Some(AdmissionResponse::denied(
            String::new(),
            err.status_code(),
            err.to_string(),
        )),
    }
}
