//! JSON Patch operations emitted by the mutation policy.
//!
//! Only the two ops the mutation policy produces are modeled. List order is
//! significant: an `add` of the annotations map must precede (or stand in
//! for) a `replace` of an individual key.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, WardenError};

/// Patch operation verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchOp {
    Add,
    Replace,
}

/// A single `{op, path, value}` instruction targeting a field path in the
/// reviewed resource document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatchOperation {
    pub op: PatchOp,
    /// Slash-delimited pointer into the resource document.
    pub path: String,
    pub value: Value,
}

impl PatchOperation {
    /// `add` at `path`.
    pub fn add(path: impl Into<String>, value: Value) -> Self {
        Self {
            op: PatchOp::Add,
            path: path.into(),
            value,
        }
    }

    /// `replace` at `path`.
    pub fn replace(path: impl Into<String>, value: Value) -> Self {
        Self {
            op: PatchOp::Replace,
            path: path.into(),
            value,
        }
    }
}

/// Serialize an operation list to the bytes carried on the response.
pub fn encode(ops: &[PatchOperation]) -> Result<Vec<u8>> {
    serde_json::to_vec(ops).map_err(|e| WardenError::Encode(format!("patch marshal: {e}")))
}
