//! Metadata view used by the mutation policy.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::value::RawValue;

use crate::error::{Result, WardenError};

use super::ReviewKind;

/// Name/namespace/annotations view of a reviewed resource.
///
/// Derived by decoding the raw body per declared kind; never constructed
/// independently by callers. Annotations keep key order (BTreeMap) and an
/// absent map folds into an empty one, which the patch logic treats the
/// same way.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub annotations: BTreeMap<String, String>,
}

/// Deployment manifest, reduced to what policy reads. Unknown fields are
/// ignored; workloads carry far more than the decision needs.
#[derive(Debug, Deserialize)]
struct DeploymentManifest {
    #[serde(default)]
    metadata: ObjectMeta,
}

/// Service manifest, reduced to what policy reads.
#[derive(Debug, Deserialize)]
struct ServiceManifest {
    #[serde(default)]
    metadata: ObjectMeta,
}

/// Decode the metadata view for the mutation path.
///
/// Deployment and Service are the only kinds with a decoding rule here; any
/// other tag fails with `UnsupportedKind` carrying the declared kind string.
pub fn extract_meta(kind: &ReviewKind, raw: &RawValue) -> Result<ObjectMeta> {
    let meta = match kind {
        ReviewKind::Deployment => {
            let m: DeploymentManifest = serde_json::from_str(raw.get())
                .map_err(|e| WardenError::Decode(e.to_string()))?;
            m.metadata
        }
        ReviewKind::Service => {
            let m: ServiceManifest = serde_json::from_str(raw.get())
                .map_err(|e| WardenError::Decode(e.to_string()))?;
            m.metadata
        }
        other => {
            return Err(WardenError::UnsupportedKind(other.as_str().to_string()));
        }
    };

    tracing::debug!(
        kind = kind.as_str(),
        name = %meta.name,
        namespace = %meta.namespace,
        "extracted metadata view"
    );
    Ok(meta)
}
