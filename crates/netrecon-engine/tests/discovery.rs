//! Discovery-loop behavior against a mock candidate source.

use netrecon_client::SearchClient;
use netrecon_engine::{Discovery, DiscoveryConfig};
use std::sync::atomic::{AtomicUsize, Ordering};
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

fn results_page(cites: &[&str]) -> String {
    let body: String = cites
        .iter()
        .map(|c| format!("<div class=\"g\"><cite>{c}</cite></div>"))
        .collect();
    format!("<html><body>{body}</body></html>")
}

fn discovery_against(server: &MockServer, max_iterations: u32) -> Discovery {
    let search = SearchClient::builder().base_url(server.uri()).build();
    let config = DiscoveryConfig {
        max_iterations,
        pacing: false,
        ..DiscoveryConfig::default()
    };
    Discovery::new(search, config)
}

#[tokio::test]
async fn converges_on_deterministic_source_and_validates_candidates() {
    let server = MockServer::start().await;

    // A fixed result set: the second round adds nothing, so the loop
    // must stop after exactly two first-page queries.
    Mock::given(method("GET"))
        .and(query_param("start", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            results_page(&[
                "https://www.example.com/about",
                "example.com",
                "evilexample.com",
                "shop.example.com/cart",
            ]),
            "text/html",
        ))
        .expect(2)
        .mount(&server)
        .await;

    // The post-convergence sweep at offset 100 happens exactly once.
    Mock::given(method("GET"))
        .and(query_param("start", "100"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(results_page(&["mail.example.com"]), "text/html"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let discovery = discovery_against(&server, 20);
    let names = discovery.discover_names("example.com").await;

    // The root domain and the lookalike are filtered out; URLs are
    // reduced to bare hostnames.
    assert_eq!(
        names,
        vec!["www.example.com", "shop.example.com", "mail.example.com"]
    );
}

/// A source that invents a fresh subdomain on every call, so the
/// candidate set never stops growing.
#[derive(Default)]
struct GrowingSource(AtomicUsize);

impl Respond for GrowingSource {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        let n = self.0.fetch_add(1, Ordering::SeqCst);
        ResponseTemplate::new(200).set_body_raw(
            results_page(&[&format!("sub{n}.example.com")]),
            "text/html",
        )
    }
}

#[tokio::test]
async fn iteration_cap_bounds_a_source_that_never_converges() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("start", "0"))
        .respond_with(GrowingSource::default())
        .expect(3)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(query_param("start", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(results_page(&[]), "text/html"))
        .expect(1)
        .mount(&server)
        .await;

    let discovery = discovery_against(&server, 3);
    let names = discovery.discover_names("example.com").await;

    assert_eq!(names.len(), 3);
    assert!(names.iter().all(|n| n.ends_with(".example.com")));
}

#[tokio::test]
async fn source_failure_yields_partial_results_not_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let discovery = discovery_against(&server, 20);
    let names = discovery.discover_names("example.com").await;
    assert!(names.is_empty());
}
