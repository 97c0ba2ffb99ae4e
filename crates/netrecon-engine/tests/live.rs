//! Live-network tests. Ignored by default; run explicitly with
//! `cargo test -- --ignored` on a machine with outbound DNS and whois.

use netrecon_core::HostKind;
use netrecon_engine::{
    Classification, Classifier, Resolver, Scan, ScanConfig, WhoisClient, WhoisSource,
};

#[tokio::test]
#[ignore = "requires network access"]
async fn classifies_a_resolvable_domain() {
    let resolver = Resolver::new(None);
    let classifier = Classifier::new(&resolver);

    match classifier.classify("example.com").await {
        Classification::Single(host) => {
            assert_eq!(host.kind(), HostKind::Domain);
            assert!(!host.ips.is_empty());
        }
        other => panic!("expected Single, got {other:?}"),
    }
}

#[tokio::test]
#[ignore = "requires network access"]
async fn unresolvable_name_is_a_bad_target() {
    let resolver = Resolver::new(None);
    let classifier = Classifier::new(&resolver);

    assert!(matches!(
        classifier.classify("definitely-not-a-real-host.invalid").await,
        Classification::Rejected(_)
    ));
}

#[tokio::test]
#[ignore = "requires network access"]
async fn domain_whois_returns_registration_text() {
    let whois = WhoisClient::new().unwrap();
    let raw = whois.domain("example.com").await.unwrap();
    assert!(raw.to_lowercase().contains("example"));
}

#[tokio::test]
#[ignore = "requires network access"]
async fn end_to_end_dns_enrichment() {
    let mut scan = Scan::new(ScanConfig::default()).unwrap();
    scan.populate(&["one.one.one.one".to_string()]).await;
    assert_eq!(scan.targets.len(), 1);

    let host = &scan.targets[0];
    assert!(!host.ips.is_empty());
}
