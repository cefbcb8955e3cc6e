//! Integration tests for the Content Extraction Stage

use sitescope::config::{Config, CrawlerConfig, ExtractionConfig, HttpConfig};
use sitescope::crawler::build_http_client;
use sitescope::extract::{ExtractionRequest, Extractor};
use sitescope::progress::NullObserver;
use sitescope::results::PageRef;
use sitescope::url::PageCategory;
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration with no politeness delay
fn create_test_config() -> Config {
    Config {
        crawler: CrawlerConfig {
            max_pages: 50,
            page_timeout_secs: 5,
            sitemap_timeout_secs: 2,
            request_delay_ms: 0,
        },
        extraction: ExtractionConfig {
            max_pages: 50,
            page_timeout_secs: 5,
            request_delay_ms: 0,
        },
        http: HttpConfig::default(),
    }
}

/// Builds an extractor wired to a null progress observer
fn create_extractor(config: &Config) -> Extractor {
    let client = build_http_client(&config.http, config.extraction.page_timeout_secs)
        .expect("client build");
    Extractor::new(config.extraction.clone(), client, Arc::new(NullObserver))
}

fn page_ref(url: String, kind: PageCategory) -> PageRef {
    PageRef { url, kind }
}

/// Repeats a word enough times to clear the content-length floors
fn filler(words: usize) -> String {
    vec!["consulting"; words].join(" ")
}

/// Mounts an HTML page at the given path
async fn mount_page(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_extracts_article_content_without_boilerplate() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/services/web",
        format!(
            r#"<html><head><title>Web Design Services</title></head><body>
            <nav><a href="/">Home</a> menu items here</nav>
            <article><h1>Web Design</h1><p>{}</p></article>
            <footer>copyright notice</footer>
            </body></html>"#,
            filler(80)
        ),
    )
    .await;

    let config = create_test_config();
    let extractor = create_extractor(&config);
    let request = ExtractionRequest::new(
        base_url.clone(),
        vec![page_ref(
            format!("{base_url}/services/web"),
            PageCategory::Service,
        )],
    );
    let result = extractor.run(&request).await.expect("extraction failed");

    assert_eq!(result.pages_processed, 1);
    let page = &result.extracted_pages[0];
    assert_eq!(page.kind, PageCategory::Service);
    assert_eq!(page.title.as_deref(), Some("Web Design Services"));
    assert_eq!(page.main_topic.as_deref(), Some("Web Design"));
    assert!(page.content.contains("consulting"));
    assert!(!page.content.contains("menu items"));
    assert!(!page.content.contains("copyright"));
    assert!(page.content.starts_with(&page.summary));
    assert_eq!(page.word_count, page.content.split_whitespace().count());

    assert_eq!(result.aggregated_content.services.len(), 1);
    assert_eq!(result.total_word_count, page.word_count);
}

#[tokio::test]
async fn test_short_content_page_dropped() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    // Cleaned body text well under the 100-character floor.
    mount_page(
        &mock_server,
        "/thin",
        "<html><body><p>Barely fifty characters of body text here.</p></body></html>".to_string(),
    )
    .await;

    let config = create_test_config();
    let extractor = create_extractor(&config);
    let request = ExtractionRequest::new(
        base_url.clone(),
        vec![page_ref(format!("{base_url}/thin"), PageCategory::Other)],
    );
    let result = extractor.run(&request).await.expect("extraction failed");

    assert!(result.extracted_pages.is_empty());
    assert_eq!(result.pages_processed, 0);
    assert_eq!(result.total_word_count, 0);
}

#[tokio::test]
async fn test_pass_through_mode_skips_fetching() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    // Pass-through must not touch the network at all.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = create_test_config();
    let extractor = create_extractor(&config);
    let mut request = ExtractionRequest::new(
        base_url.clone(),
        vec![
            page_ref(format!("{base_url}/a"), PageCategory::Blog),
            page_ref(format!("{base_url}/b"), PageCategory::Service),
        ],
    );
    request.extract_content = false;
    let result = extractor.run(&request).await.expect("extraction failed");

    assert_eq!(result.pages_processed, 2);
    for page in &result.extracted_pages {
        assert!(page.content.is_empty());
        assert_eq!(page.word_count, 0);
    }
    assert_eq!(result.total_word_count, 0);
    assert!(result.aggregated_content.blogs.is_empty());
}

#[tokio::test]
async fn test_non_html_page_skipped() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/brochure.pdf"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(vec![0x25, 0x50, 0x44, 0x46])
                .insert_header("content-type", "application/pdf"),
        )
        .mount(&mock_server)
        .await;

    let config = create_test_config();
    let extractor = create_extractor(&config);
    let request = ExtractionRequest::new(
        base_url.clone(),
        vec![page_ref(
            format!("{base_url}/brochure.pdf"),
            PageCategory::Other,
        )],
    );
    let result = extractor.run(&request).await.expect("extraction failed");

    assert!(result.extracted_pages.is_empty());
    assert_eq!(result.pages_processed, 0);
}

#[tokio::test]
async fn test_fetch_failure_omits_page_and_continues() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/good",
        format!("<html><body><main>{}</main></body></html>", filler(60)),
    )
    .await;

    let config = create_test_config();
    let extractor = create_extractor(&config);
    let request = ExtractionRequest::new(
        base_url.clone(),
        vec![
            page_ref("http://127.0.0.1:1/unreachable".to_string(), PageCategory::Blog),
            page_ref(format!("{base_url}/good"), PageCategory::Blog),
        ],
    );
    let result = extractor.run(&request).await.expect("extraction failed");

    // The unreachable page is simply omitted; the run continues.
    assert_eq!(result.pages_processed, 1);
    assert!(result.extracted_pages[0].url.ends_with("/good"));
}

#[tokio::test]
async fn test_max_pages_limits_processing() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    for route in ["/one", "/two"] {
        mount_page(
            &mock_server,
            route,
            format!("<html><body><main>{}</main></body></html>", filler(60)),
        )
        .await;
    }
    Mock::given(method("GET"))
        .and(path("/three"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = create_test_config();
    let extractor = create_extractor(&config);
    let mut request = ExtractionRequest::new(
        base_url.clone(),
        vec![
            page_ref(format!("{base_url}/one"), PageCategory::Other),
            page_ref(format!("{base_url}/two"), PageCategory::Other),
            page_ref(format!("{base_url}/three"), PageCategory::Other),
        ],
    );
    request.max_pages = Some(2);
    let result = extractor.run(&request).await.expect("extraction failed");

    assert_eq!(result.pages_processed, 2);
}

#[tokio::test]
async fn test_aggregation_buckets_by_category() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    for route in ["/services/a", "/blog/b", "/product/c", "/pricing"] {
        mount_page(
            &mock_server,
            route,
            format!("<html><body><main>{}</main></body></html>", filler(60)),
        )
        .await;
    }

    let config = create_test_config();
    let extractor = create_extractor(&config);
    let request = ExtractionRequest::new(
        base_url.clone(),
        vec![
            page_ref(format!("{base_url}/services/a"), PageCategory::Service),
            page_ref(format!("{base_url}/blog/b"), PageCategory::Blog),
            page_ref(format!("{base_url}/product/c"), PageCategory::Product),
            page_ref(format!("{base_url}/pricing"), PageCategory::Other),
        ],
    );
    let result = extractor.run(&request).await.expect("extraction failed");

    assert_eq!(result.pages_processed, 4);
    assert_eq!(result.aggregated_content.services.len(), 1);
    assert_eq!(result.aggregated_content.blogs.len(), 1);
    assert_eq!(result.aggregated_content.products.len(), 1);

    // Other pages are extracted but not bucketed.
    let total: usize = result.extracted_pages.iter().map(|p| p.word_count).sum();
    assert_eq!(result.total_word_count, total);
}

#[tokio::test]
async fn test_body_fallback_when_no_content_container() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/plain",
        format!(
            "<html><body><p>{}</p><p>{}</p></body></html>",
            filler(30),
            filler(30)
        ),
    )
    .await;

    let config = create_test_config();
    let extractor = create_extractor(&config);
    let request = ExtractionRequest::new(
        base_url.clone(),
        vec![page_ref(format!("{base_url}/plain"), PageCategory::Other)],
    );
    let result = extractor.run(&request).await.expect("extraction failed");

    assert_eq!(result.pages_processed, 1);
    assert_eq!(result.extracted_pages[0].word_count, 60);
}
