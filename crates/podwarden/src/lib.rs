//! Top-level facade crate for podwarden.
//!
//! Re-exports the core protocol types and the webhook library so users can
//! depend on a single crate.

pub mod core {
    pub use podwarden_core::*;
}

pub mod webhook {
    pub use podwarden_webhook::*;
}
