//! End-to-end review pipeline tests (route + assemble).

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::json;

use podwarden_core::protocol::review::AdmissionReview;
use podwarden_core::WardenError;
use podwarden_webhook::policy::{MutationPolicy, ValidationPolicy};
use podwarden_webhook::review::{assemble, parse_failure, route, ReviewPath};

fn engines() -> (MutationPolicy, ValidationPolicy) {
    (
        MutationPolicy::new(),
        ValidationPolicy::new(vec!["docker.io/lib/".to_string()]),
    )
}

fn review(kind: &str, object: serde_json::Value) -> AdmissionReview {
    serde_json::from_value(json!({
        "apiVersion": "admission.k8s.io/v1",
        "kind": "AdmissionReview",
        "request": {
            "uid": "e9137d7d-c318-11e8-bbad-025000000001",
            "kind": { "group": "", "version": "v1", "kind": kind },
            "namespace": "prod",
            "operation": "CREATE",
            "object": object
        }
    }))
    .unwrap()
}

#[test]
fn mutate_echoes_uid_and_attaches_patch() {
    let (mutation, validation) = engines();
    let inbound = review("Deployment", json!({ "metadata": { "name": "payments" } }));

    let decision = route(ReviewPath::Mutate, &inbound, &mutation, &validation);
    let out = assemble(&inbound, decision);

    assert_eq!(out.api_version, "admission.k8s.io/v1");
    assert_eq!(out.kind, "AdmissionReview");
    assert!(out.request.is_none());

    let resp = out.response.unwrap();
    assert_eq!(resp.uid, "e9137d7d-c318-11e8-bbad-025000000001");
    assert!(resp.allowed);
    assert_eq!(resp.patch_type.as_deref(), Some("JSONPatch"));

    let ops: serde_json::Value = serde_json::from_slice(&resp.patch.unwrap()).unwrap();
    assert_eq!(
        ops,
        json!([{
            "op": "add",
            "path": "/metadata/annotations",
            "value": { "policy/status": "mutated" }
        }])
    );
}

#[test]
fn mutate_gate_off_allows_without_patch() {
    let (mutation, validation) = engines();
    let inbound = review(
        "Deployment",
        json!({ "metadata": { "annotations": { "policy/mutate": "off" } } }),
    );

    let out = assemble(
        &inbound,
        route(ReviewPath::Mutate, &inbound, &mutation, &validation),
    );
    let resp = out.response.unwrap();

    assert!(resp.allowed);
    assert!(resp.patch.is_none());
    assert!(resp.patch_type.is_none());
    assert!(resp.status.is_none());

    // the serialized body must not carry a patch field at all
    let wire = serde_json::to_value(&resp).unwrap();
    assert!(wire.get("patch").is_none());
}

#[test]
fn mutate_unsupported_kind_is_400() {
    let (mutation, validation) = engines();
    let inbound = review("ConfigMap", json!({ "metadata": { "name": "cm" } }));

    let out = assemble(
        &inbound,
        route(ReviewPath::Mutate, &inbound, &mutation, &validation),
    );
    let resp = out.response.unwrap();

    assert!(!resp.allowed);
    let status = resp.status.unwrap();
    assert_eq!(status.code, 400);
    assert!(status.message.contains("ConfigMap"));
}

#[test]
fn validate_denies_untrusted_pod() {
    let (mutation, validation) = engines();
    let inbound = review(
        "Pod",
        json!({
            "metadata": { "name": "checkout" },
            "spec": { "containers": [
                { "name": "app", "image": "docker.io/lib/nginx:1.0" },
                { "name": "sidecar", "image": "evil.io/malware:1.0" }
            ]}
        }),
    );

    let out = assemble(
        &inbound,
        route(ReviewPath::Validate, &inbound, &mutation, &validation),
    );
    let resp = out.response.unwrap();

    assert_eq!(resp.uid, "e9137d7d-c318-11e8-bbad-025000000001");
    assert!(!resp.allowed);
    let status = resp.status.unwrap();
    assert_eq!(status.code, 403);
    assert!(status.message.contains("evil.io/malware:1.0"));
}

#[test]
fn validate_undecodable_pod_is_400() {
    let (mutation, validation) = engines();
    let inbound = review("Pod", json!({ "spec": { "containers": "oops" } }));

    let out = assemble(
        &inbound,
        route(ReviewPath::Validate, &inbound, &mutation, &validation),
    );
    let resp = out.response.unwrap();

    assert!(!resp.allowed);
    assert_eq!(resp.status.unwrap().code, 400);
}

#[test]
fn missing_object_is_400() {
    let (mutation, validation) = engines();
    let inbound: AdmissionReview = serde_json::from_value(json!({
        "apiVersion": "admission.k8s.io/v1",
        "kind": "AdmissionReview",
        "request": { "uid": "no-object", "kind": { "kind": "Deployment" } }
    }))
    .unwrap();

    let out = assemble(
        &inbound,
        route(ReviewPath::Mutate, &inbound, &mutation, &validation),
    );
    let resp = out.response.unwrap();

    assert_eq!(resp.uid, "no-object");
    assert!(!resp.allowed);
    assert_eq!(resp.status.unwrap().code, 400);
}

#[test]
fn parse_failure_is_generic_500_with_wellformed_body() {
    let out = parse_failure(&WardenError::Internal("expected value at line 1".into()));
    let wire = serde_json::to_value(&out).unwrap();

    assert_eq!(wire["apiVersion"], "admission.k8s.io/v1");
    assert_eq!(wire["kind"], "AdmissionReview");
    assert_eq!(wire["response"]["allowed"], false);
    assert_eq!(wire["response"]["status"]["code"], 500);
    assert!(!wire["response"]["status"]["message"]
        .as_str()
        .unwrap()
        .is_empty());
    // uid is omitted from the wire when there is nothing to echo
    assert!(wire["response"].get("uid").is_none());
}

#[test]
fn patch_bytes_roundtrip_on_the_wire() {
    let (mutation, validation) = engines();
    let inbound = review("Service", json!({ "metadata": { "name": "svc" } }));

    let out = assemble(
        &inbound,
        route(ReviewPath::Mutate, &inbound, &mutation, &validation),
    );
    let wire = serde_json::to_value(&out).unwrap();

    let encoded = wire["response"]["patch"].as_str().unwrap();
    let decoded = STANDARD.decode(encoded).unwrap();
    let ops: serde_json::Value = serde_json::from_slice(&decoded).unwrap();
    assert_eq!(ops[0]["op"], "add");
    assert_eq!(ops[0]["path"], "/metadata/annotations");
}
