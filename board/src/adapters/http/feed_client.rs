//! HTTP feed source
//!
//! GETs the published feed with a timestamp query parameter and no-store
//! headers so every render sees the latest broadcast.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::Client;

use crate::config::Config;
use crate::domain::entities::FeedPayload;
use crate::domain::ports::FeedSource;
use crate::error::FeedError;

/// Implementation of the feed source over HTTP
pub struct HttpFeedSource {
    http: Client,
    url: String,
    cache_bust_param: String,
}

impl HttpFeedSource {
    pub fn new(config: &Config) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Reuse an existing client (shared connection pool, custom TLS)
    pub fn with_client(http: Client, config: &Config) -> Self {
        Self {
            http,
            url: config.feed_url(),
            cache_bust_param: config.cache_bust_param.clone(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn handle_response(&self, response: reqwest::Response) -> Result<FeedPayload, FeedError> {
        let status = response.status();

        if !status.is_success() {
            return Err(FeedError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(FeedPayload::from_json_str(&body)?)
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch_latest(&self) -> Result<FeedPayload, FeedError> {
        let response = self
            .http
            .get(&self.url)
            .query(&[(self.cache_bust_param.as_str(), cache_buster())])
            .header(CACHE_CONTROL, "no-store")
            .header(PRAGMA, "no-cache")
            .send()
            .await?;

        self.handle_response(response).await
    }
}

/// Milliseconds since the epoch
fn cache_buster() -> String {
    Utc::now().timestamp_millis().to_string()
}
