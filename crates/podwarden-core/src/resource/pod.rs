//! Pod view used by the validation policy.

use serde::Deserialize;
use serde_json::value::RawValue;

use crate::error::{Result, WardenError};

use super::meta::ObjectMeta;

/// Pod manifest, reduced to metadata plus the container list.
#[derive(Debug, Default, Deserialize)]
pub struct PodManifest {
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: PodSpec,
}

/// Pod spec view. Container declaration order is preserved; validation
/// walks it front to back.
#[derive(Debug, Default, Deserialize)]
pub struct PodSpec {
    #[serde(default)]
    pub containers: Vec<Container>,
}

/// One container declaration.
#[derive(Debug, Default, Deserialize)]
pub struct Container {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: String,
}

/// Decode the pod view for the validation path. The validation path assumes
/// Pod and does not consult the declared kind.
pub fn extract_pod(raw: &RawValue) -> Result<PodManifest> {
    let pod: PodManifest =
        serde_json::from_str(raw.get()).map_err(|e| WardenError::Decode(e.to_string()))?;

    tracing::debug!(
        name = %pod.metadata.name,
        namespace = %pod.metadata.namespace,
        containers = pod.spec.containers.len(),
        "extracted pod view"
    );
    Ok(pod)
}
