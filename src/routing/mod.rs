//! Policy-driven server selection
//!
//! This module is the routing core: a filter algebra over candidate server
//! lists, named policies built from filter chains, a registry resolving
//! policy names with deterministic fallback, and the selector entry point.
//! Everything here is pure, synchronous CPU work; no operation blocks,
//! performs I/O, or fails on the request path.

pub mod filter;
pub mod policy;
pub mod registry;
pub mod selector;
pub mod telemetry;

mod events;

pub use events::{RoutingLog, TracingLog};
pub use filter::Filter;
pub use policy::Policy;
pub use registry::{PolicyRegistry, RegistryHandle};
pub use selector::Selector;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Reserved context key carrying the requested policy name
pub const POLICY_KEY: &str = "policy";

/// Name under which the built-in identity policy is always registered
pub const DEFAULT_POLICY_NAME: &str = "default";

/// Request-scoped attribute bag supplied with each routing request
///
/// String-keyed, string-valued, read-only to this crate. Only
/// [`POLICY_KEY`] is interpreted here; other keys are reserved for other
/// collaborators and pass through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    entries: HashMap<String, String>,
}

impl RequestContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a context value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|v| v.as_str())
    }

    /// The requested policy name, if the context carries one
    pub fn policy_name(&self) -> Option<&str> {
        self.get(POLICY_KEY)
    }
}

impl FromIterator<(String, String)> for RequestContext {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl From<HashMap<String, String>> for RequestContext {
    fn from(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_policy_key_lookup() {
        let context = RequestContext::from_iter([
            (POLICY_KEY.to_string(), "eu-only".to_string()),
            ("address".to_string(), "client:1234".to_string()),
        ]);

        assert_eq!(context.policy_name(), Some("eu-only"));
        assert_eq!(context.get("address"), Some("client:1234"));
        assert_eq!(RequestContext::new().policy_name(), None);
    }
}
