//! Named filter chains
//!
//! A policy is an ordered filter chain with a registry-unique name. Applying
//! a policy folds the candidate list through each filter in chain order.
//! Validation happens here, at configuration time; application has no
//! failure modes.

use super::filter::{apply_chain, Filter};
use crate::cluster::ServerInfo;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// A named, ordered chain of filters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    name: String,
    chain: Vec<Filter>,
}

impl Policy {
    /// Create a policy from an already-parsed filter chain
    ///
    /// The name must be non-empty; this is the only invariant checked at
    /// configuration time, since `usize` limits and the closed filter enum
    /// make the remaining malformed-definition cases unrepresentable.
    pub fn new(name: impl Into<String>, chain: Vec<Filter>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::Config(
                "policy name must be non-empty".to_string(),
            ));
        }
        Ok(Self { name, chain })
    }

    /// Create an identity policy (passes all candidates through unchanged)
    pub fn identity(name: impl Into<String>) -> Result<Self> {
        Self::new(name, vec![Filter::Identity])
    }

    /// Parse a policy definition from its JSON form
    ///
    /// Configuration loaders that carry definitions as JSON use this
    /// instead of handing an already-built chain to [`Policy::new`]. The
    /// name invariant is re-checked after parsing, so a definition with an
    /// empty name fails the same way a programmatic one does.
    pub fn from_json(raw: &str) -> Result<Self> {
        let parsed: Policy = serde_json::from_str(raw)?;
        Self::new(parsed.name, parsed.chain)
    }

    /// Policy name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Filter chain, in application order
    pub fn chain(&self) -> &[Filter] {
        &self.chain
    }

    /// Apply this policy to a candidate list
    ///
    /// Left-fold of the chain: stage `i`'s output feeds stage `i+1`. An
    /// empty chain behaves as identity. Never fails at request time.
    pub fn apply_to(&self, candidates: Vec<ServerInfo>) -> Vec<ServerInfo> {
        apply_chain(&self.chain, candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::Role;

    fn replicas(n: usize) -> Vec<ServerInfo> {
        (0..n)
            .map(|i| {
                ServerInfo::new(
                    format!("replica-{}", i),
                    format!("10.0.2.{}:7687", i + 1).parse().unwrap(),
                    Role::ReadReplica,
                )
            })
            .collect()
    }

    #[test]
    fn test_empty_name_is_config_error() {
        assert!(Policy::new("", vec![Filter::Identity]).is_err());
        assert!(Policy::new("  ", vec![Filter::Identity]).is_err());
        assert!(Policy::new("reads", vec![Filter::Identity]).is_ok());
    }

    #[test]
    fn test_empty_chain_behaves_as_identity() {
        let policy = Policy::new("passthrough", Vec::new()).unwrap();
        let input = replicas(3);
        assert_eq!(policy.apply_to(input.clone()), input);
    }

    #[test]
    fn test_chain_concatenation_is_associative() {
        let a = vec![Filter::Role(Role::ReadReplica), Filter::Limit(4)];
        let b = vec![Filter::Limit(2)];

        let split_a = Policy::new("a", a.clone()).unwrap();
        let split_b = Policy::new("b", b.clone()).unwrap();
        let joined = Policy::new("ab", a.into_iter().chain(b).collect()).unwrap();

        let input = replicas(6);
        assert_eq!(
            split_b.apply_to(split_a.apply_to(input.clone())),
            joined.apply_to(input)
        );
    }

    #[test]
    fn test_policy_definition_round_trips_through_json() {
        let policy = Policy::new(
            "eu-reads",
            vec![Filter::tag("region", "eu"), Filter::Limit(2)],
        )
        .unwrap();

        let json = serde_json::to_string(&policy).unwrap();
        let parsed = Policy::from_json(&json).unwrap();
        assert_eq!(parsed, policy);
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        let err = Policy::from_json("not a policy definition").unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_from_json_revalidates_name() {
        let err = Policy::from_json(r#"{"name":"","chain":["Identity"]}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
