//! Command-line argument definitions using clap.

use clap::Parser;
use std::net::IpAddr;

/// Passive network reconnaissance aggregator
///
/// Takes domains, IP addresses, or CIDR blocks and enriches them with
/// DNS records, whois registration data, service intelligence, and
/// discovered subdomains.
#[derive(Parser, Debug)]
#[command(name = "netrecon")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Targets to scan: domains, IP addresses, or CIDR blocks
    #[arg(required = true)]
    pub targets: Vec<String>,

    /// DNS server to use for all lookups instead of the system default
    #[arg(short = 'd', long = "dns-server")]
    pub dns_server: Option<IpAddr>,

    /// Shodan API key for service intelligence (or set SHODAN_API_KEY)
    #[arg(short = 's', long = "shodan-key", env = "SHODAN_API_KEY")]
    pub shodan_key: Option<String>,

    /// Reverse-sweep the CIDR blocks found during whois enrichment
    #[arg(long)]
    pub secondary: bool,

    /// Increase verbosity
    #[arg(short, long)]
    pub verbose: bool,
}

/// Deduplicate raw targets, keeping first occurrence order.
pub fn dedup_targets(targets: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for target in targets {
        if !seen.contains(&target) {
            seen.push(target);
        }
    }
    seen
}
