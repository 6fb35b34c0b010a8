//! Validation policy decision tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use podwarden_core::resource::{Container, PodManifest, PodSpec};
use podwarden_webhook::policy::{Decision, ValidationPolicy};

fn pod(images: &[&str]) -> PodManifest {
    PodManifest {
        spec: PodSpec {
            containers: images
                .iter()
                .enumerate()
                .map(|(i, image)| Container {
                    name: format!("c{i}"),
                    image: image.to_string(),
                })
                .collect(),
        },
        ..PodManifest::default()
    }
}

fn policy(prefixes: &[&str]) -> ValidationPolicy {
    ValidationPolicy::new(prefixes.iter().map(|s| s.to_string()).collect())
}

#[test]
fn untrusted_image_is_denied_by_name() {
    let p = policy(&["docker.io/lib/"]);
    let decision = p.decide(&pod(&["docker.io/lib/nginx:1.0", "evil.io/malware:1.0"]));

    let Decision::Deny { code, message } = decision else {
        panic!("expected deny, got {decision:?}");
    };
    assert_eq!(code, 403);
    assert!(message.contains("evil.io/malware:1.0"));
    assert!(message.contains("docker.io/lib/"));
}

#[test]
fn first_untrusted_image_wins() {
    let p = policy(&["docker.io/lib/"]);
    let decision = p.decide(&pod(&["evil.io/first:1", "worse.io/second:2"]));

    let Decision::Deny { message, .. } = decision else {
        panic!("expected deny, got {decision:?}");
    };
    assert!(message.contains("evil.io/first:1"));
    assert!(!message.contains("worse.io/second:2"));
}

#[test]
fn all_trusted_is_allowed() {
    let p = policy(&["docker.io/lib/", "gcr.io/prod/"]);
    let decision = p.decide(&pod(&["docker.io/lib/nginx:1.0", "gcr.io/prod/app:2"]));
    assert!(matches!(decision, Decision::Allow));
}

#[test]
fn zero_containers_is_vacuously_allowed() {
    let p = policy(&["docker.io/lib/"]);
    assert!(matches!(p.decide(&pod(&[])), Decision::Allow));
}

#[test]
fn prefix_match_is_anchored_and_exact() {
    let p = policy(&["docker.io/lib/"]);

    // prefix must match at position 0
    let decision = p.decide(&pod(&["mirror.net/docker.io/lib/nginx:1.0"]));
    assert!(matches!(decision, Decision::Deny { .. }));

    // no case normalization
    let decision = p.decide(&pod(&["DOCKER.IO/lib/nginx:1.0"]));
    assert!(matches!(decision, Decision::Deny { .. }));
}
