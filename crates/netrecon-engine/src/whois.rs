//! WHOIS lookup integration using whois-rust.

use netrecon_core::{IpWhois, ReconError, Result};
use std::net::IpAddr;
use whois_rust::{WhoIs, WhoIsLookupOptions};

/// Source of registration data, the seam between enrichment and the
/// WHOIS protocol. Registries answer over raw TCP, so tests substitute
/// an in-memory source instead of a mock server.
pub trait WhoisSource {
    /// Fetch the raw registration text for a domain
    fn domain(&self, domain: &str) -> impl std::future::Future<Output = Result<String>>;

    /// Fetch and parse the registration record for an IP address
    fn ip(&self, ip: IpAddr) -> impl std::future::Future<Output = Result<IpWhois>>;
}

/// WHOIS client for domain and IP registration lookups
pub struct WhoisClient {
    whois: WhoIs,
}

impl WhoisClient {
    /// Create a new WHOIS client from the embedded server list
    pub fn new() -> Result<Self> {
        let whois = WhoIs::from_string(include_str!("whois_servers.json"))
            .map_err(|e| ReconError::Whois(format!("{e:?}")))?;
        Ok(Self { whois })
    }

    async fn lookup(&self, query: &str) -> Result<String> {
        let options = WhoIsLookupOptions::from_string(query)
            .map_err(|e| ReconError::Whois(format!("{e:?}")))?;
        self.whois
            .lookup_async(options)
            .await
            .map_err(|e| ReconError::Whois(format!("{e:?}")))
    }
}

impl WhoisSource for WhoisClient {
    async fn domain(&self, domain: &str) -> Result<String> {
        let raw = self.lookup(domain).await?;

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ReconError::Whois(format!("empty response for {domain}")));
        }
        Ok(trimmed.to_string())
    }

    async fn ip(&self, ip: IpAddr) -> Result<IpWhois> {
        let raw = self.lookup(&ip.to_string()).await?;

        let parsed = IpWhois::parse(&raw);
        if parsed.is_empty() {
            return Err(ReconError::Whois(format!("unparseable response for {ip}")));
        }
        Ok(parsed)
    }
}
