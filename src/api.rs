//! HTTP client for the news aggregation service

use crate::constants::{AGGREGATE_PATH, APP_VERSION};
use crate::error::NetworkError;
use crate::types::AggregationResult;
use futures::future::BoxFuture;
use std::time::Duration;
use tracing::debug;

/// Anything the dashboard can pull an aggregation payload from.
///
/// The returned future owns what it needs, so it can be created by the caller
/// and polled later on a spawned task.
pub trait AggregateSource: Send + Sync + 'static {
    fn fetch_aggregated_news(&self) -> BoxFuture<'static, Result<AggregationResult, NetworkError>>;
}

/// Thin wrapper around `GET {base_url}/news/aggregate`.
///
/// No retries and no caching: a failed request is reported as-is and the
/// caller decides when to try again.
#[derive(Clone)]
pub struct NewsClient {
    http: reqwest::Client,
    base_url: String,
}

impl NewsClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, NetworkError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(format!("global-news-dashboard/{}", APP_VERSION))
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn aggregate_url(&self) -> String {
        format!("{}{}", self.base_url, AGGREGATE_PATH)
    }

    pub async fn fetch_aggregated_news(&self) -> Result<AggregationResult, NetworkError> {
        let url = self.aggregate_url();
        debug!(url = %url, "Fetching aggregated news");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        debug!(status = %status, "Aggregate response received");
        if !status.is_success() {
            return Err(NetworkError::Status { status, url });
        }

        let body = response.text().await?;
        let data: AggregationResult = serde_json::from_str(&body)?;
        debug!(
            total_articles = data.total_articles,
            topic_clusters = data.topic_clusters,
            perspectives = data.global_perspectives.len(),
            "Aggregate payload parsed"
        );
        Ok(data)
    }
}

impl AggregateSource for NewsClient {
    fn fetch_aggregated_news(&self) -> BoxFuture<'static, Result<AggregationResult, NetworkError>> {
        // reqwest::Client is a handle; cloning shares the connection pool
        let client = self.clone();
        Box::pin(async move { NewsClient::fetch_aggregated_news(&client).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = NewsClient::new("http://news.example:8000/", Duration::from_secs(5)).unwrap();
        assert_eq!(client.base_url(), "http://news.example:8000");
        assert_eq!(client.aggregate_url(), "http://news.example:8000/news/aggregate");
    }

    #[test]
    fn base_url_with_prefix_keeps_prefix() {
        let client = NewsClient::new("https://api.example.org/v1", Duration::from_secs(5)).unwrap();
        assert_eq!(client.aggregate_url(), "https://api.example.org/v1/news/aggregate");
    }
}
