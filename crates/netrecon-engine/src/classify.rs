//! Target classification.
//!
//! A raw user string is conclusively ruled out as an IP, then as a CIDR
//! block, before any DNS resolution is attempted: numeric strings that
//! are not valid addresses must never be misresolved as names by
//! accident.

use crate::resolver::Resolver;
use ipnetwork::IpNetwork;
use netrecon_core::Host;
use std::net::IpAddr;
use tracing::debug;

/// Widest block accepted for expansion: anything larger than a /16
/// (more than 65 536 addresses) is refused to bound scan cost. Applied
/// by address count so IPv6 blocks get the equivalent bound.
pub const MAX_BLOCK_ADDRESSES: u128 = 65_536;

/// Outcome of classifying one raw target string
#[derive(Debug)]
pub enum Classification {
    /// A single host: one IP, or a resolved domain
    Single(Host),
    /// A CIDR block expanded into per-address secondary hosts.
    /// Unusable addresses inside the block are skipped silently (block
    /// expansion never attempts DNS, so there is no resolution
    /// diagnostic to report).
    Block(Vec<Host>),
    /// The string was rejected
    Rejected(Rejection),
}

/// Why a target string was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// A parseable address that is reserved, loopback, multicast, or
    /// otherwise not scannable
    ReservedAddress(IpAddr),
    /// A CIDR block wider than [`MAX_BLOCK_ADDRESSES`]
    BlockTooWide(String),
    /// Not an IP, not a CIDR, and not a resolvable name
    Unresolvable(String),
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReservedAddress(ip) => write!(f, "{ip} is a reserved address"),
            Self::BlockTooWide(net) => {
                write!(f, "{net} is wider than a /16, refusing to expand")
            }
            Self::Unresolvable(name) => write!(f, "could not resolve or understand {name}"),
        }
    }
}

/// Classifies raw target strings into hosts
pub struct Classifier<'a> {
    resolver: &'a Resolver,
}

impl<'a> Classifier<'a> {
    /// Create a classifier borrowing the scan's resolver
    #[must_use]
    pub const fn new(resolver: &'a Resolver) -> Self {
        Self { resolver }
    }

    /// Classify one raw string. Order matters: IP, then CIDR, then DNS;
    /// first match wins.
    pub async fn classify(&self, raw: &str) -> Classification {
        let raw = raw.trim();

        if let Ok(ip) = raw.parse::<IpAddr>() {
            return if is_usable(ip) {
                Classification::Single(Host::from_ip(ip))
            } else {
                Classification::Rejected(Rejection::ReservedAddress(ip))
            };
        }

        if let Ok(net) = raw.parse::<IpNetwork>() {
            return expand_block(net, raw);
        }

        match self.resolver.lookup_ips(raw).await {
            Ok(ips) if !ips.is_empty() => {
                Classification::Single(Host::domain_with_ips(raw, ips))
            }
            Ok(_) | Err(_) => {
                debug!(target = raw, "forward resolution failed");
                Classification::Rejected(Rejection::Unresolvable(raw.to_string()))
            }
        }
    }
}

/// Expand a CIDR block into one host per usable address.
fn expand_block(net: IpNetwork, raw: &str) -> Classification {
    let size = match net {
        IpNetwork::V4(n) => u128::from(n.size()),
        IpNetwork::V6(n) => n.size(),
    };
    if size > MAX_BLOCK_ADDRESSES {
        return Classification::Rejected(Rejection::BlockTooWide(raw.to_string()));
    }

    let hosts = match net {
        IpNetwork::V4(n) => n
            .iter()
            .map(IpAddr::V4)
            .filter(|ip| is_usable(*ip))
            .map(Host::from_ip)
            .collect(),
        IpNetwork::V6(n) => n
            .iter()
            .map(IpAddr::V6)
            .filter(|ip| is_usable(*ip))
            .map(Host::from_ip)
            .collect(),
    };
    Classification::Block(hosts)
}

/// Addresses worth scanning: not multicast, unspecified, loopback, or
/// other reserved-alike ranges.
fn is_usable(ip: IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => {
            !(v4.is_multicast()
                || v4.is_unspecified()
                || v4.is_loopback()
                || v4.is_link_local()
                || v4.is_broadcast()
                || v4.is_documentation())
        }
        IpAddr::V6(v6) => !(v6.is_multicast() || v6.is_unspecified() || v6.is_loopback()),
    }
}
