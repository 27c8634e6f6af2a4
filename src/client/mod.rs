pub mod http;

use async_trait::async_trait;

use crate::app::Result;
use crate::domain::{FeedKind, Story};

pub use http::HttpClient;

#[async_trait]
pub trait HnClient {
    /// Ordered story IDs for a feed, most relevant first.
    async fn list_ids(&self, kind: FeedKind) -> Result<Vec<u64>>;

    /// Resolve one ID to its full story record.
    async fn fetch_story(&self, id: u64) -> Result<Story>;
}
