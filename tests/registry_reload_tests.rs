//! Integration tests for registry publication under concurrent readers
//!
//! A configuration reload builds a complete replacement registry and
//! publishes it through a single reference swap; in-flight resolutions must
//! observe either the old or the new generation, never a partial one.

use helmsman::cluster::{Role, ServerInfo};
use helmsman::routing::{
    Filter, Policy, PolicyRegistry, RegistryHandle, RequestContext, Selector, TracingLog,
    POLICY_KEY,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

fn snapshot() -> Vec<ServerInfo> {
    (0..4)
        .map(|i| {
            ServerInfo::new(
                format!("replica-{}", i),
                format!("10.0.2.{}:7687", i + 1).parse().unwrap(),
                Role::ReadReplica,
            )
        })
        .collect()
}

fn registry_with_limit(limit: usize) -> PolicyRegistry {
    let mut registry = PolicyRegistry::new(Arc::new(TracingLog));
    registry.register(Policy::new("reads", vec![Filter::Limit(limit)]).unwrap());
    registry
}

#[test]
fn test_publish_swaps_generation_for_new_readers() {
    let handle = Arc::new(RegistryHandle::new(registry_with_limit(1)));
    let selector = Selector::new(handle.clone());
    let context = RequestContext::from_iter([(POLICY_KEY.to_string(), "reads".to_string())]);

    assert_eq!(selector.select(&context, snapshot()).len(), 1);

    handle.publish(registry_with_limit(3));
    assert_eq!(selector.select(&context, snapshot()).len(), 3);
}

#[test]
fn test_held_generation_survives_publish() {
    let handle = RegistryHandle::new(registry_with_limit(1));

    let held = handle.current();
    handle.publish(registry_with_limit(3));

    let context = RequestContext::from_iter([(POLICY_KEY.to_string(), "reads".to_string())]);

    // The resolution that started before the reload still runs against the
    // generation it cloned
    let old_policy = held.resolve(&context);
    assert_eq!(old_policy.apply_to(snapshot()).len(), 1);

    let new_policy = handle.current().resolve(&context);
    assert_eq!(new_policy.apply_to(snapshot()).len(), 3);
}

#[test]
fn test_concurrent_readers_always_see_complete_registry() {
    let handle = Arc::new(RegistryHandle::new(registry_with_limit(1)));
    let stop = Arc::new(AtomicBool::new(false));

    let mut readers = Vec::new();
    for _ in 0..4 {
        let handle = handle.clone();
        let stop = stop.clone();
        readers.push(thread::spawn(move || {
            let selector = Selector::new(handle);
            let context =
                RequestContext::from_iter([(POLICY_KEY.to_string(), "reads".to_string())]);

            while !stop.load(Ordering::Relaxed) {
                let selected = selector.select(&context, snapshot());
                // Every generation registers "reads" with limit 1 or 3;
                // any other result means a torn registry was observed
                assert!(
                    selected.len() == 1 || selected.len() == 3,
                    "observed a partially published registry"
                );
            }
        }));
    }

    for i in 0..100 {
        let limit = if i % 2 == 0 { 3 } else { 1 };
        handle.publish(registry_with_limit(limit));
    }

    stop.store(true, Ordering::Relaxed);
    for reader in readers {
        reader.join().unwrap();
    }
}
