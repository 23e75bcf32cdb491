use std::sync::Arc;
use std::time::Duration;

use newsboard::application::ApiKey;
use newsboard::application::routes::app_router;
use newsboard::application::state::{AppState, AppStateConfig};
use newsboard::infrastructure::news_api::NewsApiClient;
use tokio::net::TcpListener;
use tokio::task::AbortHandle;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub const TEST_API_KEY: &str = "test-api-key";

pub struct TestApp {
    pub address: String,
    pub mock_server: MockServer,
    server_handle: AbortHandle,
}

impl TestApp {
    pub fn page_url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    /// Requests the provider mock received on `endpoint` (e.g. `/everything`).
    pub async fn provider_requests(&self, endpoint: &str) -> Vec<Request> {
        self.mock_server
            .received_requests()
            .await
            .expect("request recording is enabled")
            .into_iter()
            .filter(|r| r.url.path() == endpoint)
            .collect()
    }

    pub async fn get_page(&self, path: &str) -> (reqwest::StatusCode, String) {
        let response = reqwest::Client::new()
            .get(self.page_url(path))
            .send()
            .await
            .expect("Failed to execute request");
        let status = response.status();
        let body = response.text().await.expect("Failed to read body");
        (status, body)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self.server_handle.abort();
    }
}

pub fn test_client(base_url: &str) -> NewsApiClient {
    NewsApiClient::from_base_url(
        base_url,
        ApiKey::new(TEST_API_KEY).expect("valid key"),
        Duration::from_secs(5),
    )
    .expect("valid provider URL")
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_config(AppStateConfig::default()).await
}

pub async fn spawn_app_with_config(config: AppStateConfig) -> TestApp {
    let mock_server = MockServer::start().await;
    let state = AppState::new(Arc::new(test_client(&mock_server.uri())), config);
    let app = app_router(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");

    let local_addr = listener.local_addr().expect("Failed to get local address");
    let address = format!("http://{}", local_addr);

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Server failed to start");
    })
    .abort_handle();

    TestApp {
        address,
        mock_server,
        server_handle,
    }
}

/// A provider body with `count` articles titled "<prefix> 0", "<prefix> 1", ...
pub fn articles_body(prefix: &str, count: usize) -> serde_json::Value {
    let articles: Vec<_> = (0..count)
        .map(|i| {
            serde_json::json!({
                "source": { "id": null, "name": "Example Wire" },
                "title": format!("{prefix} {i}"),
                "description": format!("Summary of {prefix} {i}"),
                "url": format!("https://example.com/{}/{i}", prefix.to_lowercase()),
                "urlToImage": format!("https://example.com/{}/{i}.jpg", prefix.to_lowercase()),
                "publishedAt": "2024-03-15T10:30:00Z"
            })
        })
        .collect();
    serde_json::json!({
        "status": "ok",
        "totalResults": count,
        "articles": articles
    })
}

pub async fn mount_headlines(app: &TestApp, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/top-headlines"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&app.mock_server)
        .await;
}

pub async fn mount_search(app: &TestApp, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/everything"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&app.mock_server)
        .await;
}

pub fn query_value(request: &Request, key: &str) -> Option<String> {
    request
        .url
        .query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

pub fn assert_full_page(body: &str) {
    assert!(
        body.contains("<!DOCTYPE") || body.contains("<html"),
        "Expected full HTML page with DOCTYPE or <html> tag"
    );
}
