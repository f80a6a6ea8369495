//! Observability collaborator for routing anomalies
//!
//! The registry and selector report anomalies through an explicit
//! collaborator instead of reaching for ambient global logging, so callers
//! can capture or redirect the messages (tests do exactly that).

use tracing::{error, warn};

/// Receiver for the two anomaly shapes the selection core produces
///
/// Both conditions are non-fatal by design: a routing decision is always
/// producible, at worst with the built-in default policy.
pub trait RoutingLog: Send + Sync {
    /// A duplicate policy registration was dropped; the first-registered
    /// policy for the name stands. Error severity.
    fn policy_conflict(&self, name: &str);

    /// A requested policy name was not found and the built-in default was
    /// substituted. Warning severity.
    fn policy_fallback(&self, name: &str);
}

/// Production implementation forwarding to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLog;

impl RoutingLog for TracingLog {
    fn policy_conflict(&self, name: &str) {
        error!("Policy name conflict for '{}'", name);
    }

    fn policy_fallback(&self, name: &str) {
        warn!(
            "Policy definition for '{}' could not be found, using built-in default",
            name
        );
    }
}
