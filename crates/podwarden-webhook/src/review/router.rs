//! Path-based dispatch to the policy engines.

use podwarden_core::protocol::review::AdmissionReview;
use podwarden_core::resource::{self, ReviewKind};
use podwarden_core::WardenError;

use crate::policy::{Decision, MutationPolicy, ValidationPolicy};

/// Target decision path, resolved from the URL by the transport. Only these
/// two paths reach the decision core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewPath {
    Mutate,
    Validate,
}

impl ReviewPath {
    /// Label used in logs and metrics.
    pub fn as_str(self) -> &'static str {
        match self {
            ReviewPath::Mutate => "mutate",
            ReviewPath::Validate => "validate",
        }
    }
}

/// Dispatch a parsed review to the right engine and return its decision.
///
/// Every failure on the way (missing request/object, unsupported kind,
/// undecodable body) resolves to a deny decision so the caller always gets
/// a well-formed response.
pub fn route(
    path: ReviewPath,
    review: &AdmissionReview,
    mutation: &MutationPolicy,
    validation: &ValidationPolicy,
) -> Decision {
    let Some(req) = review.request.as_ref() else {
        return WardenError::BadRequest("review carries no request".into()).into();
    };

    tracing::info!(
        path = path.as_str(),
        uid = %req.uid,
        kind = %req.kind.kind,
        namespace = %req.namespace,
        operation = %req.operation,
        "admission review"
    );

    let Some(raw) = req.object.as_deref() else {
        return WardenError::BadRequest("review carries no object".into()).into();
    };

    match path {
        ReviewPath::Mutate => {
            let kind = ReviewKind::parse(&req.kind.kind);
            match resource::extract_meta(&kind, raw) {
                Ok(meta) => mutation.decide(&meta),
                Err(e) => e.into(),
            }
        }
        // The validation path reviews pods only; the declared kind is not
        // consulted.
        ReviewPath::Validate => match resource::extract_pod(raw) {
            Ok(pod) => validation.decide(&pod),
            Err(e) => e.into(),
        },
    }
}
