use std::net::SocketAddr;

use serde::Deserialize;

use podwarden_core::error::{Result, WardenError};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebhookConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub policy: PolicySection,
}

impl WebhookConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(WardenError::BadRequest(format!(
                "unsupported config version: {}",
                self.version
            )));
        }

        self.server.validate()?;

        if self.policy.whitelist_registries.is_empty() {
            return Err(WardenError::BadRequest(
                "policy.whitelist_registries must not be empty".into(),
            ));
        }
        if self.policy.whitelist_registries.iter().any(|p| p.is_empty()) {
            // An empty prefix matches every image.
            return Err(WardenError::BadRequest(
                "policy.whitelist_registries must not contain empty entries".into(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_tls_cert")]
    pub tls_cert: String,

    #[serde(default = "default_tls_key")]
    pub tls_key: String,

    /// Grace period for in-flight reviews on shutdown.
    #[serde(default = "default_drain_grace_ms")]
    pub drain_grace_ms: u64,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            tls_cert: default_tls_cert(),
            tls_key: default_tls_key(),
            drain_grace_ms: default_drain_grace_ms(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        if self.listen.parse::<SocketAddr>().is_err() {
            return Err(WardenError::BadRequest(
                "server.listen must be a valid socket address".into(),
            ));
        }
        if !(1000..=120_000).contains(&self.drain_grace_ms) {
            return Err(WardenError::BadRequest(
                "server.drain_grace_ms must be between 1000 and 120000".into(),
            ));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8443".into()
}
fn default_tls_cert() -> String {
    "/etc/webhook/certs/tls.crt".into()
}
fn default_tls_key() -> String {
    "/etc/webhook/certs/tls.key".into()
}
fn default_drain_grace_ms() -> u64 {
    10_000
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct PolicySection {
    /// Registry prefixes an image must start with to be trusted.
    #[serde(default)]
    pub whitelist_registries: Vec<String>,
}
