//! Shared error type across podwarden crates.

use thiserror::Error;

/// Protocol status code equivalents for request-scoped failures.
pub const CODE_BAD_REQUEST: u16 = 400;
/// Rejection by validation policy.
pub const CODE_FORBIDDEN: u16 = 403;
/// Envelope-level failure before policy evaluation.
pub const CODE_INTERNAL: u16 = 500;

/// Shared result type.
pub type Result<T> = std::result::Result<T, WardenError>;

/// Unified error type used by core and webhook.
///
/// Every variant is request-scoped: it resolves to a deny decision in the
/// outbound review, never to a process fault.
#[derive(Debug, Error)]
pub enum WardenError {
    /// Declared resource kind has no decoding rule on this path.
    #[error("cannot handle the kind {0} object")]
    UnsupportedKind(String),
    /// Resource body failed to decode.
    #[error("decode failed: {0}")]
    Decode(String),
    /// Patch or response serialization failed.
    #[error("encode failed: {0}")]
    Encode(String),
    /// Malformed request outside the resource body itself.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// Internal failure (e.g. the envelope itself did not parse).
    #[error("internal: {0}")]
    Internal(String),
}

impl WardenError {
    /// Map internal error to the stable status code carried in responses.
    pub fn status_code(&self) -> u16 {
        match self {
            WardenError::UnsupportedKind(_)
            | WardenError::Decode(_)
            | WardenError::Encode(_)
            | WardenError::BadRequest(_) => CODE_BAD_REQUEST,
            WardenError::Internal(_) => CODE_INTERNAL,
        }
    }
}
