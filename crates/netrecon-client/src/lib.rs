//! HTTP collaborators for the netrecon reconnaissance aggregator.
//!
//! Two external services live here:
//!
//! - [`IntelClient`]: the service-intelligence host endpoint
//!   (Shodan-style JSON API, optional API key)
//! - [`SearchClient`]: the subdomain-candidate source, an HTML search
//!   index queried with a growing exclusion list
//!
//! Both clients take an overridable base URL so integration tests can
//! point them at a local mock server.

#![doc(html_root_url = "https://docs.rs/netrecon-client/0.3.0")]

mod intel;
mod search;

pub use intel::{IntelClient, IntelClientBuilder};
pub use search::{SearchClient, SearchClientBuilder};
