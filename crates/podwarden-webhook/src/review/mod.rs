//! Review pipeline: path routing and response assembly.
//!
//! The transport decodes the envelope once, then hands it here. Routing
//! selects the policy engine by target path; assembly packages the decision
//! back into a protocol-correct envelope.

pub mod assemble;
pub mod router;

pub use assemble::{assemble, parse_failure};
pub use router::{route, ReviewPath};
