//! Iterative subdomain discovery.
//!
//! The candidate source is queried repeatedly with a growing exclusion
//! list; each round can only surface results the previous rounds pushed
//! out of the first page. The loop converges when a round adds nothing
//! new, after which a single second-page sweep catches anything
//! paginated past the first page. Candidates are then validated against
//! DNS naming rules before becoming hosts.

use crate::enrich::Enricher;
use crate::whois::WhoisSource;
use netrecon_client::SearchClient;
use netrecon_core::{name, Host};
use rand::Rng;
use std::time::Duration;
use tracing::{debug, warn};

/// Tuning for the discovery loop
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// Results requested per query
    pub page_size: u32,

    /// Offset used for the post-convergence sweep
    pub second_page_offset: u32,

    /// Defensive bound on loop iterations. The upstream source is not
    /// deterministic (ad content, unstable rendering), so convergence
    /// alone does not guarantee termination; the cap does.
    pub max_iterations: u32,

    /// Sleep a randomized 0-4 s before each query. Required against
    /// real upstream throttling; tests disable it.
    pub pacing: bool,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            page_size: 100,
            second_page_offset: 100,
            max_iterations: 20,
            pacing: true,
        }
    }
}

/// The subdomain discovery engine
pub struct Discovery {
    search: SearchClient,
    config: DiscoveryConfig,
}

impl Discovery {
    /// Create a discovery engine
    #[must_use]
    pub const fn new(search: SearchClient, config: DiscoveryConfig) -> Self {
        Self { search, config }
    }

    /// The underlying search client (also used for company-page lookup)
    #[must_use]
    pub const fn search(&self) -> &SearchClient {
        &self.search
    }

    /// Discover validated subdomains of `domain` as resolved hosts.
    ///
    /// Every validated name becomes a Domain host with forward and
    /// reverse resolution already applied.
    pub async fn discover<W: WhoisSource>(&self, domain: &str, enricher: &Enricher<W>) -> Vec<Host> {
        let names = self.discover_names(domain).await;

        let mut hosts: Vec<Host> = Vec::new();
        for name in names {
            let mut host = Host::domain(&name);
            enricher.dns_lookups(&mut host).await;
            if !hosts.contains(&host) {
                hosts.push(host);
            }
        }
        hosts
    }

    /// Run the search loop and return validated subdomain names.
    pub async fn discover_names(&self, domain: &str) -> Vec<String> {
        let domain = name::canonical(domain);
        let mut discovered: Vec<String> = Vec::new();

        let mut grew = true;
        let mut iterations = 0;
        while grew {
            if iterations >= self.config.max_iterations {
                warn!(
                    domain,
                    iterations, "discovery did not converge, stopping at iteration cap"
                );
                break;
            }
            iterations += 1;

            self.pace().await;
            match self
                .search
                .candidates(&domain, &discovered, self.config.page_size, 0)
                .await
            {
                Ok(page) => {
                    grew = union_candidates(&mut discovered, page);
                    debug!(domain, iterations, total = discovered.len(), "discovery round");
                }
                Err(e) => {
                    warn!(domain, error = %e, "candidate query failed");
                    break;
                }
            }
        }

        // One sweep past the first page for results pagination hid.
        self.pace().await;
        match self
            .search
            .candidates(
                &domain,
                &discovered,
                self.config.page_size,
                self.config.second_page_offset,
            )
            .await
        {
            Ok(page) => {
                union_candidates(&mut discovered, page);
            }
            Err(e) => warn!(domain, error = %e, "second-page query failed"),
        }

        discovered
            .into_iter()
            .filter(|candidate| name::is_strict_subdomain(candidate, &domain))
            .collect()
    }

    /// Randomized pre-query delay: a 0-3 s coarse component plus a
    /// 0-1000 ms fine one.
    async fn pace(&self) {
        if !self.config.pacing {
            return;
        }
        let delay = {
            let mut rng = rand::thread_rng();
            Duration::from_secs(rng.gen_range(0..=3))
                + Duration::from_millis(rng.gen_range(0..1000))
        };
        tokio::time::sleep(delay).await;
    }
}

/// Parse raw candidates to bare hostnames and union them into the
/// discovered set. Returns true if anything new was added.
fn union_candidates(discovered: &mut Vec<String>, page: Vec<String>) -> bool {
    let mut grew = false;
    for raw in page {
        let host = name::canonical(name::strip_scheme_and_path(&raw));
        if !host.is_empty() && !discovered.contains(&host) {
            discovered.push(host);
            grew = true;
        }
    }
    grew
}
