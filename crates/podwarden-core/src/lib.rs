//! podwarden core: admission protocol primitives, resource views, and error types.
//!
//! This crate defines the wire-level contracts and error surface shared by the
//! webhook server and any tooling built on top of it. It intentionally carries
//! no transport or runtime dependencies so the decision logic stays testable
//! in isolation.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `WardenError`/`Result` so a malformed
//! admission review never takes the webhook process down.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;
pub mod resource;

/// Shared result type.
pub use error::{Result, WardenError};
