//! Passive network reconnaissance aggregator.
//!
//! Takes a list of targets (domains, IP addresses, or CIDR blocks) and
//! builds an enriched host graph from DNS records, whois registration
//! data, service intelligence, and iterative subdomain discovery.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use netrecon::{Scan, ScanConfig};
//!
//! #[tokio::main]
//! async fn main() -> netrecon::Result<()> {
//!     let mut scan = Scan::new(ScanConfig::default())?;
//!
//!     scan.populate(&["example.com".to_string()]).await;
//!     scan.run().await;
//!
//!     for host in &scan.targets {
//!         println!("{host}");
//!         for ip in &host.ips {
//!             println!("  {} {:?}", ip.address, ip.reverse_names);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/netrecon/0.3.0")]

// Re-export core types
pub use netrecon_core::*;

// Re-export HTTP collaborators
pub use netrecon_client::{IntelClient, IntelClientBuilder, SearchClient, SearchClientBuilder};

// Re-export the engine
pub use netrecon_engine::{
    Classification, Classifier, Discovery, DiscoveryConfig, Enricher, Rejection, Resolver, Scan,
    ScanConfig, WhoisClient, WhoisSource,
};

// Re-export runtime for convenience
pub use tokio;
pub use serde;
pub use serde_json;
