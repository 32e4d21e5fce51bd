//! Test utilities and helper functions for the getcss test suite

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use kodegen_tools_getcss::{FetchError, FetchFuture, FetchResponse, Fetcher};
use mockito::{Mock, Server};

/// Route logging to the test harness; safe to call from every test
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a test HTML document with the given title and head content
pub fn create_test_html(title: &str, head: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    {head}
</head>
<body>
    <p>Hello</p>
</body>
</html>"#
    )
}

#[derive(Debug, Clone)]
enum Scripted {
    Respond {
        status: u16,
        content_type: Option<String>,
        body: String,
        delay: Duration,
        final_url: Option<String>,
    },
    Fail {
        error: FetchError,
        delay: Duration,
    },
}

/// Scripted in-memory fetcher
///
/// Unknown URLs answer 404. Every request and every completion is recorded
/// so tests can check how many fetches happened and in which order they
/// finished.
#[derive(Debug, Default)]
pub struct MockFetcher {
    routes: HashMap<String, Scripted>,
    calls: Mutex<Vec<String>>,
    completions: Mutex<Vec<String>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn html(self, url: &str, body: &str) -> Self {
        self.respond(url, 200, Some("text/html; charset=utf-8"), body, 0)
    }

    pub fn css(self, url: &str, body: &str) -> Self {
        self.respond(url, 200, Some("text/css"), body, 0)
    }

    pub fn css_after(self, url: &str, body: &str, delay_ms: u64) -> Self {
        self.respond(url, 200, Some("text/css"), body, delay_ms)
    }

    /// Answer `url` with CSS as if the request was redirected to `final_url`
    pub fn css_from(mut self, url: &str, final_url: &str, body: &str) -> Self {
        self.routes.insert(
            url.to_string(),
            Scripted::Respond {
                status: 200,
                content_type: Some("text/css".to_string()),
                body: body.to_string(),
                delay: Duration::ZERO,
                final_url: Some(final_url.to_string()),
            },
        );
        self
    }

    pub fn status(self, url: &str, status: u16, content_type: Option<&str>, body: &str) -> Self {
        self.respond(url, status, content_type, body, 0)
    }

    pub fn respond(
        mut self,
        url: &str,
        status: u16,
        content_type: Option<&str>,
        body: &str,
        delay_ms: u64,
    ) -> Self {
        self.routes.insert(
            url.to_string(),
            Scripted::Respond {
                status,
                content_type: content_type.map(str::to_string),
                body: body.to_string(),
                delay: Duration::from_millis(delay_ms),
                final_url: None,
            },
        );
        self
    }

    pub fn fail(self, url: &str, error: FetchError) -> Self {
        self.fail_after(url, error, 0)
    }

    pub fn fail_after(mut self, url: &str, error: FetchError, delay_ms: u64) -> Self {
        self.routes.insert(
            url.to_string(),
            Scripted::Fail {
                error,
                delay: Duration::from_millis(delay_ms),
            },
        );
        self
    }

    /// URLs requested, in request order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// URLs whose fetch finished, in completion order
    pub fn completions(&self) -> Vec<String> {
        self.completions.lock().unwrap().clone()
    }
}

impl Fetcher for MockFetcher {
    fn fetch<'a>(&'a self, url: &'a str) -> FetchFuture<'a> {
        Box::pin(async move {
            self.calls.lock().unwrap().push(url.to_string());

            let result = match self.routes.get(url).cloned() {
                None => Ok(FetchResponse {
                    url: url.to_string(),
                    status: 404,
                    content_type: Some("text/plain".to_string()),
                    body: "Not Found".to_string(),
                }),
                Some(Scripted::Respond {
                    status,
                    content_type,
                    body,
                    delay,
                    final_url,
                }) => {
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                    Ok(FetchResponse {
                        url: final_url.unwrap_or_else(|| url.to_string()),
                        status,
                        content_type,
                        body,
                    })
                }
                Some(Scripted::Fail { error, delay }) => {
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                    Err(error)
                }
            };

            self.completions.lock().unwrap().push(url.to_string());
            result
        })
    }
}

/// Sets up a mock HTTP server
pub async fn setup_mock_server() -> mockito::ServerGuard {
    Server::new_async().await
}

/// Creates a mock endpoint that returns HTML content
pub async fn create_html_mock(server: &mut Server, path: &str, html: &str) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(html)
        .create_async()
        .await
}

/// Creates a mock endpoint that returns a stylesheet
pub async fn create_css_mock(server: &mut Server, path: &str, css: &str) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "text/css")
        .with_body(css)
        .create_async()
        .await
}

/// Creates a mock endpoint that returns an error
pub async fn create_error_mock(server: &mut Server, path: &str, status: usize) -> Mock {
    server
        .mock("GET", path)
        .with_status(status)
        .with_header("content-type", "text/plain")
        .with_body("error")
        .create_async()
        .await
}
