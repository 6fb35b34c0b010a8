//! Annotation-gated mutation policy.
//!
//! The gate annotation decides eligibility; the patch writes a marker
//! annotation so downstream tooling can see the resource was rewritten.

use std::collections::BTreeMap;

use serde_json::json;

use podwarden_core::protocol::patch::PatchOperation;
use podwarden_core::resource::ObjectMeta;

use super::Decision;

/// Gate annotation: `n`/`no`/`false`/`off` (any case) disables mutation.
pub const ANNOTATION_MUTATE_KEY: &str = "policy/mutate";
/// Marker annotation written by the patch.
pub const ANNOTATION_STATUS_KEY: &str = "policy/status";
/// Marker value; its presence suppresses re-mutation.
pub const STATUS_MUTATED: &str = "mutated";

/// Mutation decision engine. Stateless; the annotation protocol is fixed.
#[derive(Debug, Default)]
pub struct MutationPolicy;

impl MutationPolicy {
    pub fn new() -> Self {
        Self
    }

    /// Decide against the metadata view. Never produces a patch for a
    /// resource whose mutation is not required.
    pub fn decide(&self, meta: &ObjectMeta) -> Decision {
        if !mutation_required(meta) {
            return Decision::Allow;
        }
        Decision::AllowWithPatch(annotation_patch(&meta.annotations))
    }
}

/// Gate evaluation.
///
/// Disabled when the gate value is one of {n,no,false,off} or `mutated`
/// (case-insensitive), or when the marker annotation already reads
/// `mutated`: a resource marked by a previous pass is never re-mutated.
/// Anything else, including no annotations at all, enables mutation.
fn mutation_required(meta: &ObjectMeta) -> bool {
    let gate = meta
        .annotations
        .get(ANNOTATION_MUTATE_KEY)
        .map(|v| v.to_lowercase());

    let mut required = !matches!(
        gate.as_deref(),
        Some("n") | Some("no") | Some("false") | Some("off") | Some(STATUS_MUTATED)
    );

    let marker = meta
        .annotations
        .get(ANNOTATION_STATUS_KEY)
        .map(|v| v.to_lowercase());
    if marker.as_deref() == Some(STATUS_MUTATED) {
        required = false;
    }

    tracing::info!(
        name = %meta.name,
        namespace = %meta.namespace,
        required,
        "mutation policy evaluated"
    );
    required
}

/// Compute the marker patch against the current annotation map.
///
/// When the target key is unset (or the map is absent), the patch is an
/// `add` of a one-entry map at `/metadata/annotations`. Applying it clobbers
/// sibling annotations; this matches the established wire behavior and must
/// not be silently merged. When the key already holds a non-empty value, a
/// `replace` of that key is emitted instead.
fn annotation_patch(current: &BTreeMap<String, String>) -> Vec<PatchOperation> {
    let key_unset = current
        .get(ANNOTATION_STATUS_KEY)
        .map_or(true, |v| v.is_empty());

    if key_unset {
        vec![PatchOperation::add(
            "/metadata/annotations",
            json!({ ANNOTATION_STATUS_KEY: STATUS_MUTATED }),
        )]
    } else {
        vec![PatchOperation::replace(
            format!("/metadata/annotations/{ANNOTATION_STATUS_KEY}"),
            json!(STATUS_MUTATED),
        )]
    }
}
