//! Policy layer (mutation gate, registry whitelist).
//!
//! Two fixed engines, compiled once at startup and shared read-only across
//! requests. This is deliberately not a rules engine: the decision paths are
//! closed and the engines stay independently testable.

pub mod mutation;
pub mod validation;

pub use mutation::MutationPolicy;
pub use validation::ValidationPolicy;

use podwarden_core::protocol::patch::PatchOperation;
use podwarden_core::WardenError;

/// Decision from policy evaluation.
///
/// Exactly one of "patch present" / "rejection present" can hold.
#[derive(Debug, Clone)]
pub enum Decision {
    /// Admit, no body.
    Allow,
    /// Admit and rewrite: patch operations to apply in list order.
    AllowWithPatch(Vec<PatchOperation>),
    /// Reject with a status code and a non-empty message.
    Deny { code: u16, message: String },
}

impl From<WardenError> for Decision {
    /// Evaluation failures resolve to a deny for this request only.
    fn from(err: WardenError) -> Self {
        Decision::Deny {
            code: err.status_code(),
            message: err.to_string(),
        }
    }
}
