//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full fetch, analyze and traverse cycle end-to-end.

use trawl::config::{parse_config, Config};
use trawl::crawler::Coordinator;
use trawl::TrawlError;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mounts an HTML page at `page_path`, expected to be fetched `times` times
async fn mount_page(server: &MockServer, page_path: &str, html: String, times: u64) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(ResponseTemplate::new(200).set_body_raw(html, "text/html"))
        .expect(times)
        .mount(server)
        .await;
}

fn html(title: &str, body: &str) -> String {
    format!(
        "<html><head><title>{}</title></head><body>{}</body></html>",
        title, body
    )
}

fn coordinator() -> Coordinator {
    Coordinator::new(&Config::default()).expect("Failed to create coordinator")
}

#[tokio::test]
async fn test_crawl_single_page() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        html(
            "Home",
            &format!(
                r#"<h1>Welcome Home</h1>
                <p>Some body text here</p>
                <img src="/logo.png"><img src="https://cdn.elsewhere.test/a.png"><img src="/logo.png">
                <a href="/about">About</a>
                <a href="{}/contact">Contact</a>
                <a href="https://elsewhere.test/">Elsewhere</a>
                <a href="/about">About again</a>"#,
                base_url
            ),
        ),
        1,
    )
    .await;

    let page = coordinator().crawl(&base_url).await.expect("Crawl failed");

    assert_eq!(page.url, base_url);
    assert_eq!(page.title, "Home");
    assert!(page.load_time_in_ms > 0.0);

    let hrefs: Vec<_> = page.links.iter().map(|l| l.href.as_str()).collect();
    let contact = format!("{}/contact", base_url);
    assert_eq!(
        hrefs,
        vec!["/about", contact.as_str(), "https://elsewhere.test/"]
    );
    let external: Vec<_> = page.links.iter().map(|l| l.is_external).collect();
    assert_eq!(external, vec![false, false, true]);

    assert_eq!(page.images.len(), 2);
    assert!(!page.images[0].is_external);
    assert!(page.images[1].is_external);
}

#[tokio::test]
async fn test_recursive_crawl_follows_internal_links() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        html(
            "Home",
            r##"<a href="/page1">One</a>
            <a href="page2">Two</a>
            <a href="#top">Top</a>
            <a href="/">Home</a>
            <a href="https://elsewhere.test/page3">Three</a>"##,
        ),
        1,
    )
    .await;
    mount_page(&mock_server, "/page1", html("Page 1", "<p>Content 1</p>"), 1).await;
    mount_page(&mock_server, "/page2", html("Page 2", "<p>Content two here</p>"), 1).await;

    let result = coordinator()
        .crawl_recursive(&base_url, 10)
        .await
        .expect("Crawl failed");

    let urls: Vec<_> = result.pages().iter().map(|p| p.url.clone()).collect();
    assert_eq!(
        urls,
        vec![
            base_url.clone(),
            format!("{}/page1", base_url),
            format!("{}/page2", base_url)
        ]
    );
    assert_eq!(result.pages_crawled(), 3);
    assert_eq!(result.root_url(), base_url);

    let words: Vec<_> = result.pages().iter().map(|p| p.word_count).collect();
    assert_eq!(words, vec![5, 2, 3]);
    assert_eq!(result.averages().word_count, 4);
}

#[tokio::test]
async fn test_recursive_crawl_respects_budget() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        html("Home", r#"<a href="/b">B</a><a href="/c">C</a>"#),
        1,
    )
    .await;
    mount_page(&mock_server, "/b", html("B", r#"<a href="/d">D</a>"#), 1).await;
    mount_page(&mock_server, "/c", html("C", ""), 0).await;
    mount_page(&mock_server, "/d", html("D", ""), 0).await;

    let result = coordinator()
        .crawl_recursive(&base_url, 2)
        .await
        .expect("Crawl failed");

    assert_eq!(result.pages_crawled(), 2);
    assert_eq!(result.pages()[1].url, format!("{}/b", base_url));
}

#[tokio::test]
async fn test_each_page_fetched_once() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        html("Home", r#"<a href="/b">B</a><a href="b/">B again</a>"#),
        1,
    )
    .await;
    mount_page(
        &mock_server,
        "/b",
        html(
            "B",
            &format!(
                r#"<a href="{0}">Home</a><a href="{0}/b">Self</a>"#,
                base_url
            ),
        ),
        1,
    )
    .await;

    let result = coordinator()
        .crawl_recursive(&base_url, 10)
        .await
        .expect("Crawl failed");

    assert_eq!(result.pages_crawled(), 2);
}

#[tokio::test]
async fn test_unreachable_link_aborts_crawl() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        html("Home", r#"<a href="/ok">Ok</a><a href="/missing">Missing</a>"#),
        1,
    )
    .await;
    mount_page(&mock_server, "/ok", html("Ok", ""), 1).await;

    let err = coordinator()
        .crawl_recursive(&base_url, 10)
        .await
        .expect_err("Crawl should fail");

    match &err {
        TrawlError::Fetch { url, message } => {
            assert_eq!(url, &format!("{}/missing", base_url));
            assert_eq!(message, "HTTP 404");
        }
        other => panic!("expected fetch error, got {:?}", other),
    }
    assert_eq!(err.status_code(), 502);
}

#[tokio::test]
async fn test_non_html_response_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{}", "application/json"))
        .mount(&mock_server)
        .await;

    let err = coordinator()
        .crawl(&mock_server.uri())
        .await
        .expect_err("Crawl should fail");

    assert!(matches!(err, TrawlError::Parse { .. }));
}

#[tokio::test]
async fn test_validation_errors_perform_no_requests() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(html("Home", ""), "text/html"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let coordinator = coordinator();

    let err = coordinator
        .crawl_recursive(&mock_server.uri(), 0)
        .await
        .expect_err("Zero budget should be rejected");
    assert_eq!(err.to_string(), "Max pages must be greater than 0");
    assert_eq!(err.status_code(), 400);

    let without_scheme = mock_server.uri().replacen("http://", "", 1);
    let err = coordinator
        .crawl(&without_scheme)
        .await
        .expect_err("URL without scheme should be rejected");
    assert_eq!(err.to_string(), "URL must start with http");
}

#[tokio::test]
async fn test_configured_ceiling_limits_budget() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(html("Home", ""), "text/html"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = parse_config("[crawler]\nmax-pages-limit = 5\n").expect("Invalid config");
    let coordinator = Coordinator::new(&config).expect("Failed to create coordinator");

    let err = coordinator
        .crawl_recursive(&mock_server.uri(), 6)
        .await
        .expect_err("Budget above ceiling should be rejected");
    assert!(err.is_validation());
}
