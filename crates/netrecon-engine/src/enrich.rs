//! Per-facet host enrichment.
//!
//! Every operation here is independently failable: an upstream timeout
//! or error leaves the corresponding field empty and is logged, but
//! never aborts enrichment of sibling fields or sibling hosts.

use crate::resolver::Resolver;
use crate::whois::{WhoisClient, WhoisSource};
use futures_util::future::join_all;
use netrecon_client::IntelClient;
use netrecon_core::{Host, IpRecord};
use tracing::{debug, warn};

/// Applies DNS, whois, and service-intelligence enrichment to hosts.
///
/// Generic over the whois source so tests can substitute an in-memory
/// one; production code uses the default [`WhoisClient`].
pub struct Enricher<W = WhoisClient> {
    resolver: Resolver,
    whois: W,
    intel: Option<IntelClient>,
}

impl<W: WhoisSource> Enricher<W> {
    /// Create an enricher. The intel client is optional; without one the
    /// service-scan facet is a silent no-op.
    #[must_use]
    pub const fn new(resolver: Resolver, whois: W, intel: Option<IntelClient>) -> Self {
        Self {
            resolver,
            whois,
            intel,
        }
    }

    /// Forward-resolve a domain host's IP set if it is still empty.
    pub async fn resolve_ips(&self, host: &mut Host) {
        let Some(domain) = host.domain.clone() else {
            return;
        };
        if !host.ips.is_empty() {
            return;
        }
        match self.resolver.lookup_ips(&domain).await {
            Ok(ips) => host.assign_ips(ips),
            Err(e) => debug!(domain, error = %e, "host lookup failed"),
        }
    }

    /// Forward resolution (for domain hosts) plus reverse resolution of
    /// every IP.
    pub async fn dns_lookups(&self, host: &mut Host) {
        self.resolve_ips(host).await;
        self.reverse_all(&mut host.ips).await;
    }

    /// Reverse-resolve a set of IP records concurrently.
    pub async fn reverse_all(&self, ips: &mut [IpRecord]) {
        let lookups = ips.iter_mut().map(|record| async move {
            match self.resolver.reverse(record.address).await {
                Ok(names) => record.reverse_names = names,
                Err(e) => debug!(ip = %record.address, error = %e, "reverse lookup failed"),
            }
        });
        join_all(lookups).await;
    }

    /// Resolve the host's mail exchangers, each becoming a nested host
    /// with its own forward and reverse resolution.
    pub async fn mx_lookup(&self, host: &mut Host) {
        let Some(domain) = host.domain.clone() else {
            return;
        };
        match self.resolver.mx(&domain).await {
            Ok(names) => {
                for name in names {
                    let sub = self.sub_host(&name).await;
                    host.add_mail_exchanger(sub);
                }
            }
            Err(e) => debug!(domain, error = %e, "MX lookup failed"),
        }
    }

    /// Resolve the host's name servers, each becoming a nested host with
    /// its own forward and reverse resolution.
    pub async fn ns_lookup(&self, host: &mut Host) {
        let Some(domain) = host.domain.clone() else {
            return;
        };
        match self.resolver.ns(&domain).await {
            Ok(names) => {
                for name in names {
                    let sub = self.sub_host(&name).await;
                    host.add_name_server(sub);
                }
            }
            Err(e) => debug!(domain, error = %e, "NS lookup failed"),
        }
    }

    /// Build a resolved sub-host for an MX/NS name. Sub-hosts get
    /// forward and reverse resolution only, never their own MX/NS, so
    /// two domains listing each other as exchangers cannot recurse.
    pub async fn sub_host(&self, name: &str) -> Host {
        let mut sub = Host::domain(name);
        self.dns_lookups(&mut sub).await;
        sub
    }

    /// Fetch raw whois registration text for a domain host.
    pub async fn whois_domain(&self, host: &mut Host) {
        let Some(domain) = host.domain.clone() else {
            return;
        };
        match self.whois.domain(&domain).await {
            Ok(raw) => host.registration = Some(raw),
            Err(e) => debug!(domain, error = %e, "domain whois failed"),
        }
    }

    /// Whois-resolve every IP of the host through its CIDR cache.
    ///
    /// Before querying, the cache is scanned for a block already
    /// containing the address; a hit tags the IP without a network
    /// call. The query count is therefore bounded by distinct CIDRs
    /// touched, not by IP count.
    pub async fn whois_ips(&self, host: &mut Host) {
        for record in &mut host.ips {
            if let Some((net, cached)) = host.cidr_cache.lookup(record.address) {
                record.cidr = Some(net);
                record.whois = Some(cached.clone());
                continue;
            }

            match self.whois.ip(record.address).await {
                Ok(parsed) => {
                    let flat = parsed.flatten();
                    record.whois = Some(flat.clone());
                    if let Some(cidr) = parsed.primary_cidr() {
                        record.cidr = Some(cidr);
                        host.cidr_cache.insert(cidr, flat);
                    } else {
                        debug!(ip = %record.address, "whois result carried no CIDR");
                    }
                }
                Err(e) => warn!(ip = %record.address, error = %e, "IP whois failed"),
            }
        }
    }

    /// Service-intelligence lookup for every IP. A missing API key (or
    /// any upstream failure) is a silent no-op.
    pub async fn intel_all(&self, host: &mut Host) {
        let Some(client) = &self.intel else {
            return;
        };
        for record in &mut host.ips {
            match client.host(record.address).await {
                Ok(intel) => record.intel = Some(intel),
                Err(e) => debug!(ip = %record.address, error = %e, "intel lookup failed"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netrecon_core::{IpWhois, Result, WhoisFields};
    use std::net::IpAddr;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// In-memory whois source answering for 198.51.100.0/24, counting
    /// how many IP lookups actually reach it.
    #[derive(Default)]
    struct FixedSource {
        ip_calls: AtomicUsize,
    }

    impl WhoisSource for FixedSource {
        async fn domain(&self, _domain: &str) -> Result<String> {
            Ok("Registrar: Example Registrar".to_string())
        }

        async fn ip(&self, _ip: IpAddr) -> Result<IpWhois> {
            self.ip_calls.fetch_add(1, Ordering::SeqCst);
            Ok(IpWhois::parse(
                "CIDR: 198.51.100.0/24\nNetName: EXAMPLE-NET\n",
            ))
        }
    }

    #[tokio::test]
    async fn whois_ips_fetches_once_per_distinct_block() {
        let enricher = Enricher::new(Resolver::new(None), FixedSource::default(), None);

        let mut host = Host::from_ips(vec![
            "198.51.100.10".parse().unwrap(),
            "198.51.100.20".parse().unwrap(),
        ]);
        enricher.whois_ips(&mut host).await;

        // The first address misses and fetches; the second is served
        // from the freshly cached block.
        assert_eq!(enricher.whois.ip_calls.load(Ordering::SeqCst), 1);
        assert_eq!(host.cidr_cache.len(), 1);
        for ip in &host.ips {
            assert_eq!(ip.cidr.unwrap().to_string(), "198.51.100.0/24");
            assert_eq!(ip.whois.as_ref().unwrap()["net0_netname"], "EXAMPLE-NET");
        }
    }

    // Sibling addresses of an already-cached block must be served from
    // the cache; no whois query happens for either of them (which is
    // also why this test can run offline).
    #[tokio::test]
    async fn whois_ips_reuses_cached_block_for_sibling_addresses() {
        let enricher = Enricher::new(
            Resolver::new(None),
            WhoisClient::new().unwrap(),
            None,
        );

        let mut host = Host::from_ips(vec![
            "198.51.100.10".parse().unwrap(),
            "198.51.100.20".parse().unwrap(),
        ]);
        let block = "198.51.100.0/24".parse().unwrap();
        let mut record = WhoisFields::new();
        record.insert("net0_netname".to_string(), "EXAMPLE-NET".to_string());
        host.cidr_cache.insert(block, record);

        enricher.whois_ips(&mut host).await;

        for ip in &host.ips {
            assert_eq!(ip.cidr, Some(block));
            assert_eq!(
                ip.whois.as_ref().unwrap()["net0_netname"],
                "EXAMPLE-NET"
            );
        }
        assert_eq!(host.cidr_cache.len(), 1);
    }

    #[tokio::test]
    async fn intel_is_a_silent_noop_without_a_key() {
        let enricher = Enricher::new(Resolver::new(None), WhoisClient::new().unwrap(), None);
        let mut host = Host::from_ip("198.51.100.10".parse().unwrap());
        enricher.intel_all(&mut host).await;
        assert!(host.ips[0].intel.is_none());
    }
}
