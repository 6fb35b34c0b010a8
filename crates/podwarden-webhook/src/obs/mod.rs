//! Lightweight in-process metrics (dependency-free).
//!
//! Minimal Prometheus-compatible counters without pulling in a metrics
//! crate. Values are stored as atomics and rendered by the `/metrics`
//! handler.

pub mod metrics;
