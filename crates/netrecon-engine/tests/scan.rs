//! Orchestrator behavior with explicit collaborators. IP and CIDR
//! targets classify without any network traffic, so these run offline.

use netrecon_client::SearchClient;
use netrecon_engine::{Discovery, DiscoveryConfig, Enricher, Resolver, Scan, WhoisClient};
use wiremock::MockServer;

async fn scan_against(server: &MockServer) -> Scan {
    let resolver = Resolver::new(None);
    let search = SearchClient::builder().base_url(server.uri()).build();
    let config = DiscoveryConfig {
        pacing: false,
        ..DiscoveryConfig::default()
    };

    Scan::with_parts(
        Enricher::new(resolver.clone(), WhoisClient::new().unwrap(), None),
        Discovery::new(search, config),
        resolver,
    )
}

#[tokio::test]
async fn populate_partitions_targets_and_expands_blocks() {
    let server = MockServer::start().await;
    let mut scan = scan_against(&server).await;

    scan.populate(&[
        "198.51.100.7".to_string(),
        "127.0.0.1".to_string(),
        "10.0.0.0/30".to_string(),
    ])
    .await;

    // One single IP plus the four addresses of the /30; the loopback
    // address lands in bad_targets.
    assert_eq!(scan.targets.len(), 5);
    assert_eq!(scan.bad_targets, vec!["127.0.0.1"]);
}

#[tokio::test]
async fn cidr_sweep_without_cached_blocks_is_a_noop() {
    let server = MockServer::start().await;
    let mut scan = scan_against(&server).await;

    scan.populate(&["198.51.100.7".to_string()]).await;
    scan.scan_cidrs().await;

    assert!(scan.secondary_targets.is_empty());
}
