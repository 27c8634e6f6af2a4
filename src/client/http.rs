use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::app::Result;
use crate::client::HnClient;
use crate::domain::{FeedKind, Story};

pub const DEFAULT_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0";

/// reqwest-backed client for the Hacker News Firebase API.
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .gzip(true)
            .user_agent("ember/0.1.0")
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HnClient for HttpClient {
    async fn list_ids(&self, kind: FeedKind) -> Result<Vec<u64>> {
        let url = format!("{}/{}", self.base_url, kind.endpoint());
        let response = self.client.get(&url).send().await?;
        response.error_for_status_ref()?;

        let ids = response.json::<Vec<u64>>().await?;
        Ok(ids)
    }

    async fn fetch_story(&self, id: u64) -> Result<Story> {
        let url = format!("{}/item/{}.json", self.base_url, id);
        let response = self.client.get(&url).send().await?;
        response.error_for_status_ref()?;

        let story = response.json::<Story>().await?;
        Ok(story)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = HttpClient::with_base_url("http://localhost:8080/v0/");
        assert_eq!(client.base_url, "http://localhost:8080/v0");
    }
}
