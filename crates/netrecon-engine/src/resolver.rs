//! DNS resolution wrapper.

use hickory_resolver::config::{NameServerConfig, Protocol, ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;
use netrecon_core::{ReconError, Result};
use std::net::{IpAddr, SocketAddr};

/// Async DNS resolver used for forward, reverse, MX, and NS lookups.
#[derive(Clone)]
pub struct Resolver {
    inner: TokioAsyncResolver,
}

impl Resolver {
    /// Create a resolver, optionally pointed at a specific DNS server
    /// instead of the default configuration.
    #[must_use]
    pub fn new(dns_server: Option<IpAddr>) -> Self {
        let inner = match dns_server {
            Some(server) => {
                let mut config = ResolverConfig::new();
                config.add_name_server(NameServerConfig::new(
                    SocketAddr::new(server, 53),
                    Protocol::Udp,
                ));
                TokioAsyncResolver::tokio(config, ResolverOpts::default())
            }
            None => TokioAsyncResolver::tokio(ResolverConfig::default(), ResolverOpts::default()),
        };
        Self { inner }
    }

    /// Forward-resolve a hostname to its addresses, deduplicated in
    /// resolution order.
    pub async fn lookup_ips(&self, hostname: &str) -> Result<Vec<IpAddr>> {
        let response = self
            .inner
            .lookup_ip(hostname)
            .await
            .map_err(|e| ReconError::Dns(e.to_string()))?;

        let mut addresses = Vec::new();
        for ip in response {
            if !addresses.contains(&ip) {
                addresses.push(ip);
            }
        }
        Ok(addresses)
    }

    /// Reverse lookup: PTR names for an address, trailing dot stripped.
    pub async fn reverse(&self, ip: IpAddr) -> Result<Vec<String>> {
        let response = self
            .inner
            .reverse_lookup(ip)
            .await
            .map_err(|e| ReconError::Dns(e.to_string()))?;

        Ok(response
            .iter()
            .map(|name| name.to_string().trim_end_matches('.').to_string())
            .collect())
    }

    /// Mail exchanger names for a domain, trailing dot stripped.
    pub async fn mx(&self, domain: &str) -> Result<Vec<String>> {
        let response = self
            .inner
            .mx_lookup(domain)
            .await
            .map_err(|e| ReconError::Dns(e.to_string()))?;

        Ok(response
            .iter()
            .map(|mx| mx.exchange().to_string().trim_end_matches('.').to_string())
            .collect())
    }

    /// Name server names for a domain, trailing dot stripped.
    pub async fn ns(&self, domain: &str) -> Result<Vec<String>> {
        let response = self
            .inner
            .ns_lookup(domain)
            .await
            .map_err(|e| ReconError::Dns(e.to_string()))?;

        Ok(response
            .iter()
            .map(|ns| ns.to_string().trim_end_matches('.').to_string())
            .collect())
    }
}
