//! Name-indexed policy store with a guaranteed default
//!
//! A registry is built once per configuration generation: populated by
//! repeated `register` calls off to the side, then published wholesale
//! through [`RegistryHandle`] so concurrent resolutions always observe a
//! complete registry. There is no unregister or update; configuration
//! changes replace the whole registry.

use super::events::RoutingLog;
use super::policy::Policy;
use super::telemetry;
use super::{RequestContext, DEFAULT_POLICY_NAME};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Name-indexed store of policies
///
/// The built-in default entry (an identity policy under
/// [`DEFAULT_POLICY_NAME`]) is seeded at construction and can never be
/// displaced, so resolution is total even for an otherwise empty registry.
pub struct PolicyRegistry {
    policies: HashMap<String, Arc<Policy>>,
    log: Arc<dyn RoutingLog>,
}

impl PolicyRegistry {
    /// Create a registry containing only the built-in default policy
    pub fn new(log: Arc<dyn RoutingLog>) -> Self {
        let default_policy =
            Policy::identity(DEFAULT_POLICY_NAME).expect("built-in default policy name is valid");

        let mut policies = HashMap::new();
        policies.insert(
            DEFAULT_POLICY_NAME.to_string(),
            Arc::new(default_policy),
        );

        Self { policies, log }
    }

    /// Register a policy under its name, first registration wins
    ///
    /// A duplicate name leaves the first-registered policy in place and
    /// reports the conflict as non-fatal; late or repeated configuration
    /// must not silently change live routing behavior. This also covers
    /// attempts to redefine the built-in default.
    pub fn register(&mut self, policy: Policy) {
        let name = policy.name().to_string();
        if self.policies.contains_key(&name) {
            self.log.policy_conflict(&name);
            telemetry::record_conflict(&name);
            return;
        }

        debug!("Registered routing policy '{}'", name);
        self.policies.insert(name, Arc::new(policy));
    }

    /// Resolve the policy requested by a context
    ///
    /// A context without a `"policy"` key uses the default name directly
    /// (no warning). An unknown name falls back to the built-in default
    /// with a warning; resolution never fails.
    pub fn resolve(&self, context: &RequestContext) -> Arc<Policy> {
        let name = context.policy_name().unwrap_or(DEFAULT_POLICY_NAME);

        if let Some(policy) = self.policies.get(name) {
            return policy.clone();
        }

        self.log.policy_fallback(name);
        telemetry::record_fallback(name);
        self.policies
            .get(DEFAULT_POLICY_NAME)
            .expect("built-in default policy is always present")
            .clone()
    }

    /// Check whether a name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.policies.contains_key(name)
    }

    /// Number of registered policies, including the built-in default
    pub fn len(&self) -> usize {
        self.policies.len()
    }

    /// A registry is never empty; the built-in default is always present
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Shared handle publishing registry generations to concurrent readers
///
/// Readers clone the current `Arc` under a brief read lock; a configuration
/// reload builds a complete replacement registry and swaps the single
/// reference, so no reader ever observes a partially populated map.
pub struct RegistryHandle {
    current: RwLock<Arc<PolicyRegistry>>,
}

impl RegistryHandle {
    /// Wrap a fully built registry
    pub fn new(registry: PolicyRegistry) -> Self {
        Self {
            current: RwLock::new(Arc::new(registry)),
        }
    }

    /// Get the current registry generation
    pub fn current(&self) -> Arc<PolicyRegistry> {
        self.current.read().clone()
    }

    /// Replace the registry wholesale with a new generation
    ///
    /// In-flight resolutions keep the generation they already cloned; the
    /// old registry is dropped once the last of them finishes.
    pub fn publish(&self, registry: PolicyRegistry) {
        let generation = Arc::new(registry);
        *self.current.write() = generation;
        debug!("Published new routing policy registry generation");
    }
}
