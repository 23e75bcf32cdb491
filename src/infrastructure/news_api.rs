use std::time::{Duration, Instant};

use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use reqwest::Url;
use tracing::debug;

use crate::application::config::ApiKey;
use crate::domain::articles::NewsResponse;
use crate::domain::query::{HeadlinesQuery, QueryParams, SearchQuery};

pub const NEWS_API_URL: &str = "https://newsapi.org/v2/";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = "newsboard/1.0";
const HEADLINES_PATH: &str = "top-headlines";
const SEARCH_PATH: &str = "everything";

#[derive(Debug, thiserror::Error)]
pub enum NewsApiError {
    #[error("news provider request to {endpoint} failed: {source}")]
    Request {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("news provider returned a body that is not JSON ({status}): {source}")]
    Decode {
        status: reqwest::StatusCode,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid news provider URL {0}")]
    InvalidUrl(String),
}

/// The two provider calls the dashboard makes.
///
/// Responses are returned without shape validation; a body without
/// `articles` is the caller's "no results".
#[async_trait]
pub trait NewsSource: Send + Sync {
    async fn fetch_top_headlines(
        &self,
        query: &HeadlinesQuery,
    ) -> Result<NewsResponse, NewsApiError>;

    async fn fetch_news(&self, query: &SearchQuery) -> Result<NewsResponse, NewsApiError>;
}

pub struct NewsApiClient {
    base_url: Url,
    api_key: ApiKey,
    http: reqwest::Client,
}

impl NewsApiClient {
    pub fn new(base_url: Url, api_key: ApiKey, timeout: Duration) -> Result<Self, NewsApiError> {
        let mut normalized = base_url;
        if !normalized.path().ends_with('/') {
            normalized.set_path(&format!("{}/", normalized.path().trim_end_matches('/')));
        }

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|source| NewsApiError::Request {
                endpoint: "client",
                source,
            })?;

        Ok(Self {
            base_url: normalized,
            api_key,
            http,
        })
    }

    pub fn from_base_url(
        base_url: &str,
        api_key: ApiKey,
        timeout: Duration,
    ) -> Result<Self, NewsApiError> {
        let url =
            Url::parse(base_url).map_err(|_| NewsApiError::InvalidUrl(base_url.to_string()))?;
        Self::new(url, api_key, timeout)
    }

    fn endpoint(&self, path: &'static str) -> Result<Url, NewsApiError> {
        self.base_url
            .join(path)
            .map_err(|_| NewsApiError::InvalidUrl(format!("{}{path}", self.base_url)))
    }

    async fn get(
        &self,
        path: &'static str,
        params: QueryParams,
    ) -> Result<NewsResponse, NewsApiError> {
        let url = self.endpoint(path)?;
        debug!(endpoint = path, params = ?params, "calling news provider");
        let started = Instant::now();

        let response = self
            .http
            .get(url)
            .query(&params)
            .query(&[("apiKey", self.api_key.expose())])
            .send()
            .await
            .map_err(|source| NewsApiError::Request {
                endpoint: path,
                source,
            })?;

        // Error statuses still carry a JSON body describing the problem,
        // so the body is decoded regardless of status.
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|source| NewsApiError::Request {
                endpoint: path,
                source,
            })?;

        let parsed = serde_json::from_slice::<NewsResponse>(&body)
            .map_err(|source| NewsApiError::Decode { status, source })?;

        debug!(
            endpoint = path,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            articles = parsed.articles.as_ref().map(Vec::len),
            "news provider responded"
        );

        Ok(parsed)
    }
}

#[async_trait]
impl NewsSource for NewsApiClient {
    async fn fetch_top_headlines(
        &self,
        query: &HeadlinesQuery,
    ) -> Result<NewsResponse, NewsApiError> {
        self.get(HEADLINES_PATH, query.to_params()).await
    }

    async fn fetch_news(&self, query: &SearchQuery) -> Result<NewsResponse, NewsApiError> {
        self.get(SEARCH_PATH, query.to_params(today())).await
    }
}

/// The local calendar date, read fresh on every call.
fn today() -> NaiveDate {
    Local::now().date_naive()
}
