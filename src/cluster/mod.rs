//! Cluster membership snapshot consumed by the routing core
//!
//! The consensus/role-discovery subsystem produces these values; this crate
//! treats them as read-only input. No duplicate server IDs appear within a
//! single snapshot, and a snapshot may be empty.

mod server;

pub use server::{Role, ServerInfo};
