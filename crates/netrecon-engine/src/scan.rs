//! Scan orchestration.
//!
//! One bounded pass per invocation: classify the raw targets, then
//! enrich each resulting host facet by facet. No state survives the
//! process.

use crate::classify::{Classification, Classifier, MAX_BLOCK_ADDRESSES};
use crate::discover::{Discovery, DiscoveryConfig};
use crate::enrich::Enricher;
use crate::resolver::Resolver;
use crate::whois::WhoisClient;
use ipnetwork::IpNetwork;
use netrecon_client::{IntelClient, SearchClient};
use netrecon_core::{Host, Result};
use std::net::IpAddr;
use tracing::{debug, info, warn};

/// Scan-wide configuration, threaded explicitly to every component
/// that needs it. No process-global flags.
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    /// DNS server override for all lookups
    pub dns_server: Option<IpAddr>,

    /// Service-intelligence API key; without one the intel facet is
    /// skipped silently
    pub intel_key: Option<String>,

    /// Discovery loop tuning
    pub discovery: DiscoveryConfig,
}

/// Owns the target list and drives the enrichment pipeline over it
pub struct Scan {
    enricher: Enricher,
    discovery: Discovery,
    resolver: Resolver,

    /// Classified scan targets
    pub targets: Vec<Host>,

    /// Raw strings that could not be classified, with the rejection
    /// reason
    pub bad_targets: Vec<String>,

    /// Hosts deduced from CIDR sweeps and other relations
    pub secondary_targets: Vec<Host>,
}

impl Scan {
    /// Build a scan from configuration
    pub fn new(config: ScanConfig) -> Result<Self> {
        let resolver = Resolver::new(config.dns_server);
        let whois = WhoisClient::new()?;
        let intel = config.intel_key.clone().map(IntelClient::new);
        let search = SearchClient::new();

        Ok(Self {
            enricher: Enricher::new(resolver.clone(), whois, intel),
            discovery: Discovery::new(search, config.discovery),
            resolver,
            targets: Vec::new(),
            bad_targets: Vec::new(),
            secondary_targets: Vec::new(),
        })
    }

    /// Build a scan with explicit collaborators (used by tests to point
    /// the search source at a mock server).
    #[must_use]
    pub fn with_parts(enricher: Enricher, discovery: Discovery, resolver: Resolver) -> Self {
        Self {
            enricher,
            discovery,
            resolver,
            targets: Vec::new(),
            bad_targets: Vec::new(),
            secondary_targets: Vec::new(),
        }
    }

    /// Classify raw target strings, partitioning them into `targets`
    /// and `bad_targets`.
    pub async fn populate(&mut self, raw_targets: &[String]) {
        let classifier = Classifier::new(&self.resolver);
        for raw in raw_targets {
            match classifier.classify(raw).await {
                Classification::Single(host) => self.targets.push(host),
                Classification::Block(hosts) => {
                    info!(block = raw.as_str(), count = hosts.len(), "expanded block");
                    self.targets.extend(hosts);
                }
                Classification::Rejected(reason) => {
                    warn!(target = raw.as_str(), %reason, "rejected target");
                    self.bad_targets.push(raw.clone());
                }
            }
        }
    }

    /// Drive the full enrichment pipeline over every target.
    pub async fn run(&mut self) {
        for host in &mut self.targets {
            info!(host = %host, "scanning");

            self.enricher.dns_lookups(host).await;
            self.enricher.ns_lookup(host).await;
            self.enricher.mx_lookup(host).await;
            self.enricher.whois_domain(host).await;
            self.enricher.whois_ips(host).await;
            self.enricher.intel_all(host).await;

            if let Some(domain) = host.domain.clone() {
                match self.discovery.search().company_page(&domain).await {
                    Ok(page) => host.company_page = page,
                    Err(e) => debug!(domain, error = %e, "company-page lookup failed"),
                }

                let subdomains = self.discovery.discover(&domain, &self.enricher).await;
                for sub in subdomains {
                    host.add_subdomain(sub);
                }
            }
        }
    }

    /// Secondary pass, off by default: reverse-DNS sweep across the
    /// CIDR blocks recovered during whois enrichment, collecting every
    /// address with at least one PTR result.
    pub async fn scan_cidrs(&mut self) {
        let blocks: Vec<IpNetwork> = self
            .targets
            .iter()
            .flat_map(|host| host.cidr_cache.iter().map(|(net, _)| net))
            .collect();

        for net in blocks {
            let size = match net {
                IpNetwork::V4(n) => u128::from(n.size()),
                IpNetwork::V6(n) => n.size(),
            };
            if size > MAX_BLOCK_ADDRESSES {
                warn!(block = %net, "skipping reverse sweep of oversized block");
                continue;
            }
            info!(block = %net, "reverse DNS sweep");

            let addresses: Vec<IpAddr> = match net {
                IpNetwork::V4(n) => n.iter().map(IpAddr::V4).collect(),
                IpNetwork::V6(n) => n.iter().map(IpAddr::V6).collect(),
            };
            for address in addresses {
                if let Ok(names) = self.resolver.reverse(address).await {
                    if names.is_empty() {
                        continue;
                    }
                    let mut host = Host::from_ip(address);
                    host.ips[0].reverse_names = names;
                    if !self.secondary_targets.contains(&host) {
                        self.secondary_targets.push(host);
                    }
                }
            }
        }
    }
}
