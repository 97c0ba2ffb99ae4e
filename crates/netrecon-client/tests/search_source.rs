//! Integration tests for the subdomain-candidate source against a mock
//! search endpoint.

use netrecon_client::SearchClient;
use wiremock::matchers::{method, query_param, query_param_contains};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn results_page(cites: &[&str]) -> String {
    let body: String = cites
        .iter()
        .map(|c| format!("<div class=\"g\"><cite>{c}</cite></div>"))
        .collect();
    format!("<html><body>{body}</body></html>")
}

#[tokio::test]
async fn candidates_strip_markup() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param_contains("q", "site:*example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            results_page(&[
                "https://www.example.com/about",
                "<b>mail</b>.example.com",
            ]),
            "text/html",
        ))
        .mount(&server)
        .await;

    let client = SearchClient::builder().base_url(server.uri()).build();
    let candidates = client.candidates("example.com", &[], 100, 0).await.unwrap();

    assert_eq!(
        candidates,
        vec!["https://www.example.com/about", "mail.example.com"]
    );
}

#[tokio::test]
async fn exclusions_are_sent_but_root_domain_is_kept_queryable() {
    let server = MockServer::start().await;

    // The query must carry -site: terms for discovered subdomains but
    // never for the root domain itself.
    Mock::given(method("GET"))
        .and(query_param(
            "q",
            "site:*example.com -site:www.example.com",
        ))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(results_page(&["shop.example.com"]), "text/html"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = SearchClient::builder().base_url(server.uri()).build();
    let exclude = vec!["example.com".to_string(), "www.example.com".to_string()];
    let candidates = client
        .candidates("example.com", &exclude, 100, 0)
        .await
        .unwrap();

    assert_eq!(candidates, vec!["shop.example.com"]);
}

#[tokio::test]
async fn offset_is_forwarded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("start", "100"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(results_page(&["late.example.com"]), "text/html"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = SearchClient::builder().base_url(server.uri()).build();
    let candidates = client.candidates("example.com", &[], 100, 100).await.unwrap();
    assert_eq!(candidates, vec!["late.example.com"]);
}

#[tokio::test]
async fn company_page_returns_first_profile_url() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param_contains("q", "linkedin.com/company"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            results_page(&[
                "https://twitter.com/example",
                "https://www.linkedin.com/company/example-corp",
            ]),
            "text/html",
        ))
        .mount(&server)
        .await;

    let client = SearchClient::builder().base_url(server.uri()).build();
    let page = client.company_page("example.com").await.unwrap();
    assert_eq!(
        page.as_deref(),
        Some("https://www.linkedin.com/company/example-corp")
    );
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = SearchClient::builder().base_url(server.uri()).build();
    assert!(client.candidates("example.com", &[], 100, 0).await.is_err());
}
