//! Typed views over reviewed resources.
//!
//! The declared kind string is resolved once into the closed [`ReviewKind`]
//! tag; extraction is then a total function over that tag instead of a string
//! comparison chain spread across the decision path.
//!
//! Decoding is pure and panic-free: malformed bodies surface as
//! `WardenError::Decode`, unknown kinds as `WardenError::UnsupportedKind`.

pub mod meta;
pub mod pod;

pub use meta::{extract_meta, ObjectMeta};
pub use pod::{extract_pod, Container, PodManifest, PodSpec};

/// Closed set of kinds this webhook knows how to decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewKind {
    Deployment,
    Service,
    Pod,
    /// Anything else, carrying the offending kind string for the response.
    Unsupported(String),
}

impl ReviewKind {
    /// Resolve the declared kind string. Total: unknown kinds map to
    /// `Unsupported` rather than an error, so the decision path decides
    /// how to report them.
    pub fn parse(kind: &str) -> Self {
        match kind {
            "Deployment" => ReviewKind::Deployment,
            "Service" => ReviewKind::Service,
            "Pod" => ReviewKind::Pod,
            other => ReviewKind::Unsupported(other.to_string()),
        }
    }

    /// Kind string as declared (for logs and error messages).
    pub fn as_str(&self) -> &str {
        match self {
            ReviewKind::Deployment => "Deployment",
            ReviewKind::Service => "Service",
            ReviewKind::Pod => "Pod",
            ReviewKind::Unsupported(k) => k.as_str(),
        }
    }
}
