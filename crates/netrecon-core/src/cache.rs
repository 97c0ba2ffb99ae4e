//! CIDR-scoped whois memoization.
//!
//! Registries answer for whole network blocks, so once one IP in a block
//! has been looked up there is nothing left to ask about its neighbors.
//! The cache is scoped to a single [`Host`](crate::Host): every IP of a
//! host is checked against the cached blocks before a new whois query is
//! issued, which bounds query count by distinct CIDRs touched rather than
//! by IP count.

use ipnetwork::IpNetwork;
use std::collections::BTreeMap;
use std::net::IpAddr;

/// Flattened whois registration record (`field -> value`).
pub type WhoisFields = BTreeMap<String, String>;

/// Per-host mapping from network block to its whois record.
#[derive(Debug, Clone, Default)]
pub struct CidrCache {
    entries: Vec<(IpNetwork, WhoisFields)>,
}

impl CidrCache {
    /// Create an empty cache
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Find a cached block containing `ip`, if any.
    #[must_use]
    pub fn lookup(&self, ip: IpAddr) -> Option<(IpNetwork, &WhoisFields)> {
        self.entries
            .iter()
            .find(|(net, _)| net.contains(ip))
            .map(|(net, record)| (*net, record))
    }

    /// Insert a block and its record. A block already present is kept
    /// as-is; each CIDR appears at most once.
    pub fn insert(&mut self, net: IpNetwork, record: WhoisFields) {
        if !self.entries.iter().any(|(existing, _)| *existing == net) {
            self.entries.push((net, record));
        }
    }

    /// Iterate cached `(block, record)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (IpNetwork, &WhoisFields)> {
        self.entries.iter().map(|(net, record)| (*net, record))
    }

    /// Number of distinct blocks cached
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no blocks are cached
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
