//! AdmissionReview envelope (JSON).
//!
//! The core stores the resource body as `RawValue` to enable lazy decoding by
//! the extractor: the envelope parses once, the body parses only on the path
//! that actually needs it.
//!
//! One envelope type carries both directions, mirroring the platform
//! protocol: the API server sends `request`, the webhook answers with
//! `response` and the `apiVersion`/`kind` header echoed verbatim.

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

/// `apiVersion` of the review envelope this webhook speaks.
pub const API_VERSION: &str = "admission.k8s.io/v1";
/// `kind` of the review envelope.
pub const KIND_ADMISSION_REVIEW: &str = "AdmissionReview";
/// Patch encoding tag attached to mutating responses.
pub const PATCH_TYPE_JSON: &str = "JSONPatch";

/// Review envelope (request and response halves share it).
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionReview {
    /// Protocol version, echoed into the response.
    #[serde(default)]
    pub api_version: String,
    /// Envelope kind, echoed into the response.
    #[serde(default)]
    pub kind: String,
    /// Inbound sub-request; absent on responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<AdmissionRequest>,
    /// Outbound decision; absent on requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<AdmissionResponse>,
}

/// The reviewed change: correlation id, declared kind, raw resource body.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionRequest {
    /// Opaque correlation id, echoed back unmodified.
    #[serde(default)]
    pub uid: String,
    /// Declared group/version/kind of the resource under review.
    #[serde(default)]
    pub kind: GroupVersionKind,
    /// Resource name (logging only; may be empty for generated names).
    #[serde(default)]
    pub name: String,
    /// Resource namespace (logging only).
    #[serde(default)]
    pub namespace: String,
    /// Operation (CREATE/UPDATE/...), passed through for logging.
    #[serde(default)]
    pub operation: String,
    /// Raw serialized resource body, decoded lazily per declared kind.
    #[serde(default)]
    pub object: Option<Box<RawValue>>,
}

/// Declared kind discriminator of the reviewed resource.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct GroupVersionKind {
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub kind: String,
}

/// The decision half of the envelope.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionResponse {
    /// Correlation id copied from the request (empty when the envelope
    /// itself failed to parse and there is nothing to echo).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uid: String,
    /// Whether the change is admitted.
    #[serde(default)]
    pub allowed: bool,
    /// Machine-readable code + human message on rejection paths.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    /// Patch bytes (JSON Patch list), base64 on the wire.
    #[serde(default, with = "patch_bytes", skip_serializing_if = "Option::is_none")]
    pub patch: Option<Vec<u8>>,
    /// Patch encoding tag; always `JSONPatch` when `patch` is present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch_type: Option<String>,
}

/// Status object carried on deny / error decisions.
#[derive(Debug, Serialize, Deserialize)]
pub struct Status {
    /// Protocol status code equivalent (400/403/500).
    pub code: u16,
    /// Non-empty human-readable reason.
    pub message: String,
}

/// Base64 (de)serialization of the patch byte field, as the platform
/// protocol encodes byte arrays inside JSON.
mod patch_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(v: &Option<Vec<u8>>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match v {
            Some(bytes) => s.serialize_str(&STANDARD.encode(bytes)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Option<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(d)?;
        match raw {
            Some(enc) => STANDARD
                .decode(enc.as_bytes())
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

impl AdmissionResponse {
    /// Plain admit, no body.
    pub fn allowed(uid: String) -> Self {
        Self {
            uid,
            allowed: true,
            ..Self::default()
        }
    }

    /// Admit with an attached patch (already encoded operation list).
    pub fn allowed_with_patch(uid: String, patch: Vec<u8>) -> Self {
        Self {
            uid,
            allowed: true,
            patch: Some(patch),
            patch_type: Some(PATCH_TYPE_JSON.to_string()),
            ..Self::default()
        }
    }

    /// Reject with a status code and a non-empty message.
    pub fn denied(uid: String, code: u16, message: String) -> Self {
        Self {
            uid,
            allowed: false,
            status: Some(Status { code, message }),
            ..Self::default()
        }
    }
}
