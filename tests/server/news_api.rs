use chrono::{Days, Local};
use newsboard::domain::query::{HeadlinesQuery, Language, SearchQuery, SortBy};
use newsboard::infrastructure::news_api::{NewsApiError, NewsSource};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::helpers::{TEST_API_KEY, articles_body, test_client};

#[tokio::test]
async fn headlines_send_country_page_size_and_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/top-headlines"))
        .and(query_param("country", "us"))
        .and(query_param("pageSize", "6"))
        .and(query_param("apiKey", TEST_API_KEY))
        .and(query_param_is_missing("category"))
        .and(query_param_is_missing("language"))
        .respond_with(ResponseTemplate::new(200).set_body_json(articles_body("Headline", 3)))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let response = client
        .fetch_top_headlines(&HeadlinesQuery::default())
        .await
        .expect("headlines call should succeed");

    assert_eq!(response.into_articles().map(|a| a.len()), Some(3));
}

#[tokio::test]
async fn headlines_send_category_when_set() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/top-headlines"))
        .and(query_param("category", "science"))
        .respond_with(ResponseTemplate::new(200).set_body_json(articles_body("Science", 1)))
        .expect(1)
        .mount(&server)
        .await;

    let query = HeadlinesQuery::default().with_category(Some("science".to_string()));
    test_client(&server.uri())
        .fetch_top_headlines(&query)
        .await
        .expect("headlines call should succeed");
}

#[tokio::test]
async fn search_sends_all_parameters_with_seven_day_window() {
    let server = MockServer::start().await;
    let from = Local::now()
        .date_naive()
        .checked_sub_days(Days::new(7))
        .expect("date in range")
        .format("%Y-%m-%d")
        .to_string();

    Mock::given(method("GET"))
        .and(path("/everything"))
        .and(query_param("q", "climate"))
        .and(query_param("language", "de"))
        .and(query_param("sortBy", "relevancy"))
        .and(query_param("pageSize", "100"))
        .and(query_param("from", from.as_str()))
        .and(query_param("apiKey", TEST_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(articles_body("Climate", 2)))
        .expect(1)
        .mount(&server)
        .await;

    let query = SearchQuery::new(
        Some("climate".to_string()),
        Language::German,
        SortBy::Relevancy,
    );
    let response = test_client(&server.uri())
        .fetch_news(&query)
        .await
        .expect("search call should succeed");

    assert_eq!(response.into_articles().map(|a| a.len()), Some(2));
}

#[tokio::test]
async fn search_without_query_omits_q() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/everything"))
        .and(query_param_is_missing("q"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let response = test_client(&server.uri())
        .fetch_news(&SearchQuery::default())
        .await
        .expect("search call should succeed");

    assert!(response.into_articles().is_none());
}

#[tokio::test]
async fn error_status_with_json_body_is_returned_not_raised() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/everything"))
        .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
            "status": "error",
            "code": "rateLimited",
            "message": "You have made too many requests recently."
        })))
        .mount(&server)
        .await;

    let response = test_client(&server.uri())
        .fetch_news(&SearchQuery::default())
        .await
        .expect("JSON error bodies are passed through");

    assert_eq!(
        response.error_summary().as_deref(),
        Some("rateLimited: You have made too many requests recently.")
    );
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/top-headlines"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
        .mount(&server)
        .await;

    let result = test_client(&server.uri())
        .fetch_top_headlines(&HeadlinesQuery::default())
        .await;

    assert!(matches!(result, Err(NewsApiError::Decode { .. })));
}

#[tokio::test]
async fn unreachable_provider_is_a_request_error() {
    // Bind then release a port so nothing is listening on it.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let uri = format!("http://{}", listener.local_addr().expect("local address"));
    drop(listener);

    let result = test_client(&uri)
        .fetch_news(&SearchQuery::default())
        .await;

    assert!(matches!(result, Err(NewsApiError::Request { .. })));
}

#[tokio::test]
async fn failures_are_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/everything"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let result = test_client(&server.uri())
        .fetch_news(&SearchQuery::default())
        .await;

    assert!(result.is_err());
}
