//! Webhook config loader (strict parsing).
//!
//! The registry whitelist can be overridden at startup by the
//! `WHITELIST_REGISTRIES` env var (comma-separated), which operators
//! commonly set from the deployment manifest. The override goes through the
//! same validation as the file value.

pub mod schema;

use std::fs;

use podwarden_core::error::{Result, WardenError};

pub use schema::{PolicySection, ServerSection, WebhookConfig};

/// Env var overriding `policy.whitelist_registries`.
pub const WHITELIST_ENV: &str = "WHITELIST_REGISTRIES";

/// Load, apply the env override, validate.
pub fn load(path: &str) -> Result<WebhookConfig> {
    let mut cfg = parse_file(path)?;
    if let Ok(raw) = std::env::var(WHITELIST_ENV) {
        override_whitelist(&mut cfg, &raw);
    }
    cfg.validate()?;
    Ok(cfg)
}

fn parse_file(path: &str) -> Result<WebhookConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| WardenError::Internal(format!("read config failed: {e}")))?;
    parse_str(&s)
}

/// Parse without validating; `load` and tests drive validation explicitly.
pub fn parse_str(s: &str) -> Result<WebhookConfig> {
    serde_yaml::from_str(s).map_err(|e| WardenError::BadRequest(format!("invalid yaml: {e}")))
}

/// Parse and validate, for callers holding the config in memory.
pub fn load_from_str(s: &str) -> Result<WebhookConfig> {
    let cfg = parse_str(s)?;
    cfg.validate()?;
    Ok(cfg)
}

/// Replace the file whitelist with a comma-separated list. Blank entries are
/// dropped here and the result is still subject to `validate()`, so an empty
/// override fails instead of trusting every registry.
pub fn override_whitelist(cfg: &mut WebhookConfig, raw: &str) {
    cfg.policy.whitelist_registries = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
}
