use std::time::Duration;

use scout_engine::{FailureKind, FetchSettings, PageFetcher, ReqwestPageFetcher};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn fetcher_returns_index_page_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("<a href=\"100MB.bin\">100MB</a>", "text/html; charset=utf-8"),
        )
        .mount(&server)
        .await;

    let fetcher = ReqwestPageFetcher::new(FetchSettings::default());
    let page = fetcher
        .fetch_index(&format!("{}/", server.uri()))
        .await
        .expect("fetch ok");
    assert_eq!(page, "<a href=\"100MB.bin\">100MB</a>");
}

#[tokio::test]
async fn fetcher_passes_through_error_page_bodies() {
    // The status line is not inspected; a 404 body is still returned and
    // simply yields no pattern matches downstream.
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not here"))
        .mount(&server)
        .await;

    let fetcher = ReqwestPageFetcher::new(FetchSettings::default());
    let page = fetcher
        .fetch_index(&format!("{}/missing", server.uri()))
        .await
        .expect("body still returned");
    assert_eq!(page, "not here");
}

#[tokio::test]
async fn fetcher_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_string("slow"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..FetchSettings::default()
    };
    let fetcher = ReqwestPageFetcher::new(settings);

    let err = fetcher
        .fetch_index(&format!("{}/slow", server.uri()))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn fetcher_rejects_invalid_url() {
    let fetcher = ReqwestPageFetcher::new(FetchSettings::default());
    let err = fetcher.fetch_index("not a url").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}
