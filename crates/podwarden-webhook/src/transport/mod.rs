//! Transport layer (HTTP admission endpoints).
//!
//! Exposes the handlers that decode the review envelope once before it
//! reaches the routing/policy layers.

pub mod http;
