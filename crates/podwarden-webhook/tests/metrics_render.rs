//! Metrics registry tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use podwarden_webhook::obs::metrics::WebhookMetrics;

#[test]
fn counters_accumulate_per_label_set() {
    let m = WebhookMetrics::default();

    m.reviews_total.inc(&[("path", "mutate")]);
    m.reviews_total.inc(&[("path", "mutate")]);
    m.reviews_total.inc(&[("path", "validate")]);
    m.decisions_total
        .inc(&[("path", "validate"), ("outcome", "denied")]);

    assert_eq!(m.reviews_total.get(&[("path", "mutate")]), 2);
    assert_eq!(m.reviews_total.get(&[("path", "validate")]), 1);
    // label order does not matter
    assert_eq!(
        m.decisions_total.get(&[("outcome", "denied"), ("path", "validate")]),
        1
    );
}

#[test]
fn render_exposes_text_format_and_draining() {
    let m = WebhookMetrics::default();
    m.reviews_total.inc(&[("path", "mutate")]);

    let out = m.render();
    assert!(out.contains("# TYPE podwarden_reviews_total counter"));
    assert!(out.contains("podwarden_reviews_total{path=\"mutate\"} 1"));
    assert!(out.contains("podwarden_draining 0"));

    m.set_draining();
    assert!(m.render().contains("podwarden_draining 1"));
}
