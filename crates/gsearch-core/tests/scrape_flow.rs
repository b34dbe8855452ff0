//! End-to-end scrapes against a mock Google

use gsearch_core::{
    ClientConfig, DomainMap, GoogleScraper, HttpFetcher, PageFetcher, SearchError, SearchQuery,
    SequencePicker, UserAgentPool,
};
use std::time::{Duration, Instant};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn result_page(links: &[&str]) -> String {
    let blocks: String = links
        .iter()
        .enumerate()
        .map(|(i, link)| {
            format!(
                concat!(
                    r#"<div class="g"><a href="{0}"><h3 class="r">Result {1}</h3></a>"#,
                    r#"<span class="st">About result {1}</span></div>"#
                ),
                link, i
            )
        })
        .collect();
    format!("<!DOCTYPE html><html><body><div id=\"rso\">{}</div></body></html>", blocks)
}

fn html(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body, "text/html; charset=UTF-8")
}

fn domains_for(server: &MockServer) -> DomainMap {
    let json = format!(r#"{{"com": "{}/search?q="}}"#, server.uri());
    DomainMap::from_json_str(&json).unwrap()
}

async fn mount_page(server: &MockServer, start: &str, body: String) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("start", start))
        .respond_with(html(body))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn two_pages_yield_five_results_ranked_in_order() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "0",
        result_page(&["https://one.example/", "https://two.example/", "https://three.example/"]),
    )
    .await;
    mount_page(
        &server,
        "10",
        result_page(&["https://four.example/", "https://five.example/"]),
    )
    .await;

    let scraper = GoogleScraper::new(domains_for(&server)).unwrap();
    let results = scraper
        .scrape(&SearchQuery::new("rust lang", 2))
        .await
        .unwrap();

    let ranks: Vec<u32> = results.iter().map(|r| r.rank).collect();
    let urls: Vec<&str> = results.iter().map(|r| r.url.as_str()).collect();
    assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
    assert_eq!(
        urls,
        vec![
            "https://one.example/",
            "https://two.example/",
            "https://three.example/",
            "https://four.example/",
            "https://five.example/",
        ]
    );
    assert_eq!(results[3].title, "Result 0");
    assert_eq!(results[3].description, "About result 0");
}

#[tokio::test]
async fn query_string_matches_google_format() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "rust lang"))
        .and(query_param("num", "30"))
        .and(query_param("hl", "en"))
        .and(query_param("start", "0"))
        .and(query_param("filter", "0"))
        .respond_with(html(result_page(&["https://one.example/"])))
        .expect(1)
        .mount(&server)
        .await;

    let scraper = GoogleScraper::new(domains_for(&server)).unwrap();
    let results = scraper
        .scrape(&SearchQuery::new("  rust lang ", 1))
        .await
        .unwrap();
    assert_eq!(results.len(), 1);
}

#[tokio::test]
async fn blocked_page_aborts_whole_scrape() {
    let server = MockServer::start().await;
    mount_page(&server, "0", result_page(&["https://one.example/"])).await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("start", "10"))
        .respond_with(ResponseTemplate::new(429))
        .expect(1)
        .mount(&server)
        .await;

    let scraper = GoogleScraper::new(domains_for(&server)).unwrap();
    let result = scraper.scrape(&SearchQuery::new("rust", 3)).await;

    match result {
        Err(SearchError::BlockedOrError { status, url }) => {
            assert_eq!(status, 429);
            assert!(url.contains("start=10"));
        }
        other => panic!("Expected BlockedOrError, got {:?}", other),
    }

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
}

#[tokio::test]
async fn unsupported_country_sends_no_request() {
    let server = MockServer::start().await;

    let scraper = GoogleScraper::new(domains_for(&server)).unwrap();
    let result = scraper
        .scrape(&SearchQuery::new("rust", 2).country("zz"))
        .await;

    match result {
        Err(SearchError::UnsupportedCountry(code)) => assert_eq!(code, "zz"),
        other => panic!("Expected UnsupportedCountry, got {:?}", other),
    }
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn user_agent_rotates_per_request() {
    let server = MockServer::start().await;
    for (start, agent) in [("0", "agent-b"), ("10", "agent-a")] {
        Mock::given(method("GET"))
            .and(query_param("start", start))
            .and(header("user-agent", agent))
            .respond_with(html(result_page(&["https://one.example/"])))
            .expect(1)
            .mount(&server)
            .await;
    }

    let pool = UserAgentPool::new(
        vec!["agent-a".to_string(), "agent-b".to_string()],
        Box::new(SequencePicker::new(vec![1, 0])),
    )
    .unwrap();
    let config = ClientConfig {
        user_agents: pool,
        ..Default::default()
    };

    let scraper = GoogleScraper::with_config(domains_for(&server), config).unwrap();
    let results = scraper.scrape(&SearchQuery::new("rust", 2)).await.unwrap();
    assert_eq!(results.len(), 2);
}

#[tokio::test]
async fn paced_scrape_spaces_page_requests() {
    let server = MockServer::start().await;
    for start in ["0", "10", "20"] {
        mount_page(&server, start, result_page(&["https://one.example/"])).await;
    }

    let config = ClientConfig {
        requests_per_second: Some(5.0),
        ..Default::default()
    };
    let scraper = GoogleScraper::with_config(domains_for(&server), config).unwrap();

    let began = Instant::now();
    let results = scraper.scrape(&SearchQuery::new("rust", 3)).await.unwrap();

    assert_eq!(results.len(), 3);
    assert!(began.elapsed() >= Duration::from_millis(400));
}

#[tokio::test]
async fn non_html_response_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"items": []}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new().unwrap();
    let result = fetcher.fetch(&format!("{}/search?q=rust", server.uri())).await;
    assert!(matches!(result, Err(SearchError::ParseError(_))));
}

#[tokio::test]
async fn fetcher_returns_body_on_200() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(html("<html><body>ok</body></html>".to_string()))
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new().unwrap();
    let body = fetcher
        .fetch(&format!("{}/search?q=rust", server.uri()))
        .await
        .unwrap();
    assert!(body.contains("ok"));
}

#[tokio::test]
async fn unreachable_host_is_transport_error() {
    let domains = DomainMap::from_json_str(r#"{"com": "http://127.0.0.1:1/search?q="}"#).unwrap();
    let scraper = GoogleScraper::new(domains).unwrap();

    let result = scraper.scrape(&SearchQuery::new("rust", 1)).await;
    assert!(matches!(result, Err(SearchError::TransportError(_))));
}
