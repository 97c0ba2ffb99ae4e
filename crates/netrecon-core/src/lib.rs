//! Core types for the netrecon reconnaissance aggregator.
//!
//! This crate provides the data model shared across the workspace:
//!
//! - **Types**: [`Host`], [`IpRecord`], and the whois/intel result shapes
//! - **Cache**: the per-host CIDR-scoped whois cache ([`CidrCache`])
//! - **Names**: DNS-name canonicalization and subdomain validation
//! - **Errors**: shared error handling with [`ReconError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use netrecon_core::{Host, Result};
//!
//! fn report(host: &Host) -> Result<()> {
//!     println!("{host}");
//!     for ip in &host.ips {
//!         println!("  {} {:?}", ip.address, ip.reverse_names);
//!     }
//!     Ok(())
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/netrecon-core/0.3.0")]

mod cache;
mod error;
pub mod name;
pub mod types;

pub use cache::{CidrCache, WhoisFields};
pub use error::{ReconError, Result};
pub use types::*;
