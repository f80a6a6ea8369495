//! Filter algebra over candidate server lists
//!
//! A filter is a pure, total transform from an ordered candidate list to an
//! ordered candidate list. Composite variants build conjunctions and unions
//! out of the leaf variants, so a policy chain and a nested chain share one
//! reduction algorithm. Filters never fail at apply time: malformed
//! definitions are rejected when policies are constructed, not here.

use crate::cluster::{Role, ServerInfo};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A filter over an ordered candidate server list
///
/// Independent stages (e.g. two disjoint tag matches) commute, but
/// order-sensitive stages like [`Filter::Limit`] act on whatever order the
/// previous stage produced. The engine never reorders a chain on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Filter {
    /// Pass all candidates through unchanged
    Identity,
    /// Keep only servers with the given role, input order preserved
    Role(Role),
    /// Keep only servers carrying an exact tag key/value pair
    ///
    /// A server without the key is excluded; a missing key is never a
    /// wildcard.
    Tag { key: String, value: String },
    /// Keep at most the first `k` servers of the current order
    ///
    /// Fewer than `k` available returns all of them; zero returns an empty
    /// list. Never an error, never padded.
    Limit(usize),
    /// Apply a sequence of filters left to right, each stage consuming the
    /// previous stage's output
    Chain(Vec<Filter>),
    /// Evaluate alternatives independently against the same input and
    /// concatenate their results, dropping duplicate server IDs while
    /// preserving first-seen order
    Any(Vec<Filter>),
    /// Evaluate alternatives in order against the same input and return the
    /// first non-empty result
    ///
    /// Expresses preferred-then-fallback groups: a later alternative is only
    /// consulted when every earlier one eliminated all candidates.
    FirstMatch(Vec<Filter>),
}

impl Filter {
    /// Exact tag match filter
    pub fn tag(key: impl Into<String>, value: impl Into<String>) -> Self {
        Filter::Tag {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Apply this filter to a candidate list
    ///
    /// Total over any input, including the empty list. Server identities are
    /// passed through untouched; only membership and order change, and only
    /// where a variant's contract says so.
    pub fn apply(&self, candidates: Vec<ServerInfo>) -> Vec<ServerInfo> {
        match self {
            Filter::Identity => candidates,
            Filter::Role(role) => candidates
                .into_iter()
                .filter(|s| s.role == *role)
                .collect(),
            Filter::Tag { key, value } => candidates
                .into_iter()
                .filter(|s| s.tag(key) == Some(value.as_str()))
                .collect(),
            Filter::Limit(k) => {
                let mut candidates = candidates;
                candidates.truncate(*k);
                candidates
            }
            Filter::Chain(filters) => apply_chain(filters, candidates),
            Filter::Any(alternatives) => {
                let mut seen: HashSet<String> = HashSet::new();
                let mut merged = Vec::new();
                for alternative in alternatives {
                    for server in alternative.apply(candidates.clone()) {
                        if seen.insert(server.id.clone()) {
                            merged.push(server);
                        }
                    }
                }
                merged
            }
            Filter::FirstMatch(alternatives) => {
                for alternative in alternatives {
                    let survivors = alternative.apply(candidates.clone());
                    if !survivors.is_empty() {
                        return survivors;
                    }
                }
                Vec::new()
            }
        }
    }
}

/// Left-to-right fold of a filter sequence
///
/// Stage `i`'s output is stage `i+1`'s input. An empty sequence behaves as
/// identity. Policy application uses this same reduction.
pub(crate) fn apply_chain(filters: &[Filter], candidates: Vec<ServerInfo>) -> Vec<ServerInfo> {
    filters
        .iter()
        .fold(candidates, |current, filter| filter.apply(current))
}
