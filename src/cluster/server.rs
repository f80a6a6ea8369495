//! Membership snapshot model
//!
//! Immutable description of one server as reported by the role-discovery
//! subsystem. The routing core only reads these values; a fresh snapshot is
//! supplied per request and discarded after the response is built.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::net::SocketAddr;

/// Role a server currently plays in the causal cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Write leader (accepts writes)
    Leader,
    /// Write follower (replicates the leader, serves reads)
    Follower,
    /// Read-only replica
    ReadReplica,
}

/// Information about one server in the membership snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerInfo {
    /// Server ID (unique identifier within a snapshot)
    pub id: String,
    /// Server address
    pub addr: SocketAddr,
    /// Current cluster role
    pub role: Role,
    /// Queryable attributes (e.g. region -> "eu")
    pub tags: HashMap<String, String>,
}

impl ServerInfo {
    /// Create a new server info with no tags
    pub fn new(id: impl Into<String>, addr: SocketAddr, role: Role) -> Self {
        Self {
            id: id.into(),
            addr,
            role,
            tags: HashMap::new(),
        }
    }

    /// Add a tag, builder style
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// Look up a tag value
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(|v| v.as_str())
    }

    /// Check if this server can accept writes
    pub fn accepts_writes(&self) -> bool {
        matches!(self.role, Role::Leader)
    }

    /// Check if this server can serve reads
    pub fn accepts_reads(&self) -> bool {
        matches!(self.role, Role::Follower | Role::ReadReplica)
    }
}
