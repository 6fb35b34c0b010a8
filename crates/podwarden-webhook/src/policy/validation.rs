//! Registry-whitelist validation policy.
//!
//! Construct once at startup with the configured whitelist, then share via
//! the app state. Evaluation is a pure prefix check over container images.

use podwarden_core::error::CODE_FORBIDDEN;
use podwarden_core::resource::PodManifest;

use super::Decision;

/// Validation decision engine over the compiled registry whitelist.
pub struct ValidationPolicy {
    whitelist: Vec<String>,
}

impl ValidationPolicy {
    pub fn new(whitelist: Vec<String>) -> Self {
        Self { whitelist }
    }

    pub fn whitelist(&self) -> &[String] {
        &self.whitelist
    }

    /// Walk containers in declaration order; the first image that matches no
    /// whitelist prefix rejects the pod and ends evaluation. Callers act on
    /// the first rejection reason, so collecting further violations would
    /// only add latency.
    ///
    /// Trust is a position-0 substring match: no wildcards, no scheme
    /// normalization. A pod with zero containers is vacuously allowed.
    pub fn decide(&self, pod: &PodManifest) -> Decision {
        for container in &pod.spec.containers {
            let trusted = self
                .whitelist
                .iter()
                .any(|prefix| container.image.starts_with(prefix.as_str()));

            if !trusted {
                tracing::info!(
                    name = %pod.metadata.name,
                    namespace = %pod.metadata.namespace,
                    container = %container.name,
                    image = %container.image,
                    "untrusted registry"
                );
                return Decision::Deny {
                    code: CODE_FORBIDDEN,
                    message: format!(
                        "{} image comes from an untrusted registry! Only images from {:?} are allowed.",
                        container.image, self.whitelist
                    ),
                };
            }
        }

        Decision::Allow
    }
}
