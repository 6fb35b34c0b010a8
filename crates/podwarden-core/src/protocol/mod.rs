//! Admission protocol wire formats.
//!
//! This module hosts the review envelope and the patch encoding:
//! - `review`: the JSON AdmissionReview envelope, with the resource body kept
//!   as a lazy `RawValue` until a policy engine asks for a typed view.
//! - `patch`: JSON Patch operations (add/replace) and their list encoding.
//!
//! All parsers are panic-free: malformed input is reported as `WardenError`
//! so the webhook stays resilient to hostile or garbage payloads.

pub mod patch;
pub mod review;
