//! Selection entry point
//!
//! Composes registry resolution with policy application. The selector holds
//! no per-request state; it reads whichever registry generation is current
//! and runs the resolved policy's chain over the membership snapshot.

use super::registry::RegistryHandle;
use super::telemetry;
use super::RequestContext;
use crate::cluster::ServerInfo;
use std::sync::Arc;
use tracing::debug;

/// Policy-driven server selector
pub struct Selector {
    registry: Arc<RegistryHandle>,
}

impl Selector {
    /// Create a selector reading from a registry handle
    pub fn new(registry: Arc<RegistryHandle>) -> Self {
        Self { registry }
    }

    /// Select the servers to hand back for one routing request
    ///
    /// The result is the authoritative subset and ordering passed to the
    /// protocol-response layer. Never fails: an unknown or missing policy
    /// name degrades to the built-in default, so at worst the caller
    /// receives the unfiltered candidate list.
    pub fn select(
        &self,
        context: &RequestContext,
        candidates: Vec<ServerInfo>,
    ) -> Vec<ServerInfo> {
        let registry = self.registry.current();
        let policy = registry.resolve(context);

        let offered = candidates.len();
        let selected = policy.apply_to(candidates);

        debug!(
            "Policy '{}' selected {} of {} candidates",
            policy.name(),
            selected.len(),
            offered
        );
        telemetry::record_selection(policy.name(), offered as u64, selected.len() as u64);

        selected
    }
}
