//! Integration tests against a local mock HTTP server

mod common;

use common::{
    create_css_mock, create_error_mock, create_html_mock, create_test_html, init_logging,
    setup_mock_server,
};
use kodegen_tools_getcss::utils::DEFAULT_USER_AGENT;
use kodegen_tools_getcss::{FetchError, Fetcher, GetCssError, GetCssOptions, HttpFetcher, get_css};

#[tokio::test]
async fn test_default_user_agent_is_sent() {
    let mut server = setup_mock_server().await;
    let mock = server
        .mock("GET", "/site.css")
        .match_header("user-agent", DEFAULT_USER_AGENT)
        .with_status(200)
        .with_header("content-type", "text/css; charset=utf-8")
        .with_body(".site{}")
        .create_async()
        .await;

    let fetcher = HttpFetcher::new(&GetCssOptions::default()).unwrap();
    let response = fetcher
        .fetch(&format!("{}/site.css", server.url()))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.status, 200);
    assert_eq!(response.body, ".site{}");
    assert!(response.is_css());
}

#[tokio::test]
async fn test_caller_headers_are_not_overridden() {
    let mut server = setup_mock_server().await;
    let mock = server
        .mock("GET", "/")
        .match_header("user-agent", "custom-agent/2.0")
        .match_header("x-trace", "abc")
        .with_status(200)
        .with_body("ok")
        .create_async()
        .await;

    let options = GetCssOptions::builder()
        .header("User-Agent", "custom-agent/2.0")
        .header("X-Trace", "abc")
        .build();
    let fetcher = HttpFetcher::new(&options).unwrap();
    fetcher.fetch(&format!("{}/", server.url())).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_error_status_is_returned_as_response() {
    let mut server = setup_mock_server().await;
    let _mock = create_error_mock(&mut server, "/missing.css", 404).await;

    let fetcher = HttpFetcher::new(&GetCssOptions::default()).unwrap();
    let response = fetcher
        .fetch(&format!("{}/missing.css", server.url()))
        .await
        .unwrap();

    assert_eq!(response.status, 404);
    assert!(!response.is_success());
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let mut server = setup_mock_server().await;
    let _mock = create_css_mock(&mut server, "/huge.css", &".x{}".repeat(100)).await;

    let options = GetCssOptions::builder().max_body_bytes(64).build();
    let fetcher = HttpFetcher::new(&options).unwrap();
    let err = fetcher
        .fetch(&format!("{}/huge.css", server.url()))
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::TooLarge { limit: 64, .. }));
}

#[tokio::test]
async fn test_invalid_header_is_rejected_up_front() {
    let options = GetCssOptions::builder().header("Bad Header", "x").build();
    let err = HttpFetcher::new(&options).unwrap_err();
    assert!(matches!(err, FetchError::InvalidHeader(_)));
}

#[tokio::test]
async fn test_get_css_end_to_end() {
    init_logging();
    let mut server = setup_mock_server().await;
    let html = create_test_html(
        "Served",
        r#"<link rel="stylesheet" href="/a.css">
    <style>.inline{}</style>
    <link rel="stylesheet" href="/broken.css">
    <link rel="stylesheet" href="b.css">"#,
    );
    let _page = create_html_mock(&mut server, "/", &html).await;
    let _a = create_css_mock(&mut server, "/a.css", ".a{}").await;
    let _b = create_css_mock(&mut server, "/b.css", ".b{}").await;
    let _broken = create_error_mock(&mut server, "/broken.css", 500).await;

    let result = get_css(&server.url(), GetCssOptions::default())
        .await
        .unwrap()
        .expect("page has stylesheets");

    assert_eq!(result.page_title, "Served");
    assert_eq!(result.css, ".a{}.inline{}.b{}");
    assert_eq!(result.links.len(), 3);
    assert_eq!(
        result.links[1].error.as_ref().and_then(FetchError::status),
        Some(500)
    );
}

#[tokio::test]
async fn test_get_css_direct_stylesheet() {
    let mut server = setup_mock_server().await;
    let _css = create_css_mock(&mut server, "/only.css", "p { color: green }").await;

    let result = get_css(&format!("{}/only.css", server.url()), GetCssOptions::default())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(result.css, "p { color: green }");
    assert_eq!(result.links.len(), 1);
}

#[tokio::test]
async fn test_get_css_bad_response() {
    let mut server = setup_mock_server().await;
    let _mock = create_error_mock(&mut server, "/gone", 410).await;

    let err = get_css(&format!("{}/gone", server.url()), GetCssOptions::default())
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(410));
}

#[tokio::test]
async fn test_get_css_connection_refused_is_transport_error() {
    let options = GetCssOptions::builder().timeout_ms(1000).build();
    let err = get_css("http://127.0.0.1:1/index.html", options)
        .await
        .unwrap_err();

    assert!(matches!(err, GetCssError::Transport { .. }));
}

#[tokio::test]
async fn test_invalid_input_never_reaches_the_network() {
    let mut server = setup_mock_server().await;
    let mock = server
        .mock("GET", mockito::Matcher::Any)
        .with_status(200)
        .expect(0)
        .create_async()
        .await;

    let host = server.host_with_port();
    for input in [format!("{host}/page"), format!("ftp://{host}/a.css"), String::new()] {
        let err = get_css(&input, GetCssOptions::default()).await.unwrap_err();
        assert_eq!(err, GetCssError::InvalidUrl(input.clone()));
    }

    mock.assert_async().await;
}

#[tokio::test]
async fn test_zero_limits_from_json_use_defaults() {
    let mut server = setup_mock_server().await;
    let _css = create_css_mock(&mut server, "/a.css", ".a{}").await;

    let options = GetCssOptions::from_json(r#"{"timeoutMs": 0, "maxBodyBytes": 0}"#).unwrap();
    let result = get_css(&format!("{}/a.css", server.url()), options)
        .await
        .expect("zero limits must not reject the fetch")
        .unwrap();

    assert_eq!(result.css, ".a{}");
}
