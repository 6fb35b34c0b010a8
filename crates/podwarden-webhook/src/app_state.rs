//! Shared application state for the webhook.
//!
//! Policies are compiled once here and shared read-only via `Arc`; request
//! handling needs no locking.

use std::sync::Arc;

use podwarden_core::error::Result;

use crate::config::WebhookConfig;
use crate::obs::metrics::WebhookMetrics;
use crate::policy::{MutationPolicy, ValidationPolicy};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: WebhookConfig,
    mutation: MutationPolicy,
    validation: ValidationPolicy,
    metrics: WebhookMetrics,
}

impl AppState {
    /// Build application state. Returns Result so main can handle errors
    /// gracefully (no panic).
    pub fn new(cfg: WebhookConfig) -> Result<Self> {
        cfg.validate()?;

        let validation = ValidationPolicy::new(cfg.policy.whitelist_registries.clone());
        tracing::info!(whitelist = ?validation.whitelist(), "registry whitelist compiled");

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                mutation: MutationPolicy::new(),
                validation,
                metrics: WebhookMetrics::default(),
            }),
        })
    }

    pub fn cfg(&self) -> &WebhookConfig {
        &self.inner.cfg
    }

    pub fn mutation(&self) -> &MutationPolicy {
        &self.inner.mutation
    }

    pub fn validation(&self) -> &ValidationPolicy {
        &self.inner.validation
    }

    pub fn metrics(&self) -> &WebhookMetrics {
        &self.inner.metrics
    }

    /// Mark draining; readyz answers 503 from here on.
    pub fn set_draining(&self) {
        self.inner.metrics.set_draining();
    }

    pub fn is_draining(&self) -> bool {
        self.inner.metrics.is_draining()
    }
}
