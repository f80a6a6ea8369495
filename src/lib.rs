//! # Helmsman
//!
//! Policy-driven server selection for causal cluster load balancing.
//!
//! Given a snapshot of cluster membership (write-leader, write-followers,
//! read replicas) and a client routing request, Helmsman decides which
//! subset and ordering of servers to hand back as read/write endpoints.
//!
//! ## Architecture
//!
//! - **Cluster model**: immutable per-request membership snapshot
//!   ([`cluster::ServerInfo`] with role and tags)
//! - **Filter algebra**: composable, total transforms over an ordered
//!   candidate list ([`routing::Filter`])
//! - **Policy registry**: name-indexed policies with a guaranteed built-in
//!   default and first-wins conflict handling ([`routing::PolicyRegistry`])
//! - **Selector**: resolves the requested policy from the request context
//!   and applies it ([`routing::Selector`])
//!
//! The core performs no network I/O and holds no per-request state. Role
//! discovery, the wire protocol, and textual policy parsing are external
//! collaborators.

pub mod cluster;
pub mod routing;

mod error;

pub use error::{Error, Result};

/// Re-exports for convenience
pub mod prelude {
    pub use crate::cluster::{Role, ServerInfo};
    pub use crate::routing::{
        Filter, Policy, PolicyRegistry, RegistryHandle, RequestContext, RoutingLog, Selector,
        TracingLog, DEFAULT_POLICY_NAME, POLICY_KEY,
    };
    pub use crate::{Error, Result};
}
