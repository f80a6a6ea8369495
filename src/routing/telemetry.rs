//! Selection-path telemetry instruments and recording helpers.

use opentelemetry::global;
use opentelemetry::metrics::{Counter, Histogram};
use opentelemetry::KeyValue;
use std::sync::OnceLock;

struct SelectionInstruments {
    selection_requests: Counter<u64>,
    policy_conflicts: Counter<u64>,
    policy_fallbacks: Counter<u64>,
    candidates_in: Histogram<u64>,
    candidates_out: Histogram<u64>,
}

fn instruments() -> &'static SelectionInstruments {
    static INSTRUMENTS: OnceLock<SelectionInstruments> = OnceLock::new();
    INSTRUMENTS.get_or_init(|| {
        let meter = global::meter("helmsman.routing");
        SelectionInstruments {
            selection_requests: meter
                .u64_counter("helmsman.routing.selections")
                .with_description("Total selection requests by policy")
                .init(),
            policy_conflicts: meter
                .u64_counter("helmsman.routing.policy_conflicts")
                .with_description("Duplicate policy registrations dropped")
                .init(),
            policy_fallbacks: meter
                .u64_counter("helmsman.routing.policy_fallbacks")
                .with_description("Resolutions that fell back to the built-in default")
                .init(),
            candidates_in: meter
                .u64_histogram("helmsman.routing.candidates_in")
                .with_description("Candidate servers offered per selection")
                .init(),
            candidates_out: meter
                .u64_histogram("helmsman.routing.candidates_out")
                .with_description("Candidate servers surviving per selection")
                .init(),
        }
    })
}

/// Record one completed selection
pub fn record_selection(policy: &str, candidates_in: u64, candidates_out: u64) {
    let i = instruments();
    let attrs = [KeyValue::new("policy", policy.to_string())];

    i.selection_requests.add(1, &attrs);
    i.candidates_in.record(candidates_in, &attrs);
    i.candidates_out.record(candidates_out, &attrs);
}

/// Record a dropped duplicate registration
pub fn record_conflict(policy: &str) {
    instruments()
        .policy_conflicts
        .add(1, &[KeyValue::new("policy", policy.to_string())]);
}

/// Record a resolution that fell back to the built-in default
pub fn record_fallback(policy: &str) {
    instruments()
        .policy_fallbacks
        .add(1, &[KeyValue::new("policy", policy.to_string())]);
}
