//! Target resolution and enrichment for the netrecon aggregator.
//!
//! The engine turns raw target strings into a graph of related hosts:
//!
//! - [`classify`]: decide whether a string is an IP, a CIDR block, or a
//!   resolvable name, and reject the rest
//! - [`enrich`]: per-facet DNS/whois/intel enrichment, each facet
//!   independently failable
//! - [`discover`]: the iterative subdomain discovery loop
//! - [`scan`]: the orchestrator driving all of the above over a target
//!   list

#![doc(html_root_url = "https://docs.rs/netrecon-engine/0.3.0")]

pub mod classify;
pub mod discover;
pub mod enrich;
mod resolver;
pub mod scan;
mod whois;

pub use classify::{Classification, Classifier, Rejection};
pub use discover::{Discovery, DiscoveryConfig};
pub use enrich::Enricher;
pub use resolver::Resolver;
pub use scan::{Scan, ScanConfig};
pub use whois::{WhoisClient, WhoisSource};
