use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::app::Result;
use crate::cache::StoryCache;
use crate::client::HnClient;
use crate::domain::{FeedKind, Story};

pub const DEFAULT_LIMIT: usize = 30;
pub const DEFAULT_WORKERS: usize = 10;

/// Resolves a feed's ID list into full story records.
///
/// IDs are fetched concurrently under a semaphore bound, consulting the
/// cache before the network. A failed per-item fetch drops that item;
/// only a failed ID-list fetch fails the whole load.
pub struct Aggregator {
    client: Arc<dyn HnClient + Send + Sync>,
    cache: Arc<StoryCache>,
    semaphore: Arc<Semaphore>,
}

impl Aggregator {
    pub fn new(client: Arc<dyn HnClient + Send + Sync>, cache: Arc<StoryCache>) -> Self {
        Self::with_workers(client, cache, DEFAULT_WORKERS)
    }

    pub fn with_workers(
        client: Arc<dyn HnClient + Send + Sync>,
        cache: Arc<StoryCache>,
        workers: usize,
    ) -> Self {
        Self {
            client,
            cache,
            semaphore: Arc::new(Semaphore::new(workers.max(1))),
        }
    }

    pub fn cache(&self) -> &StoryCache {
        &self.cache
    }

    /// Load up to `limit` stories for a feed, preserving the upstream ID
    /// order and keeping only stories with an external URL.
    pub async fn load_stories(&self, kind: FeedKind, limit: usize) -> Result<Vec<Story>> {
        let mut ids = self.client.list_ids(kind).await?;
        ids.truncate(limit);

        tracing::debug!("Resolving {} ids for {} feed", ids.len(), kind);

        let mut handles = Vec::with_capacity(ids.len());

        for id in ids {
            let client = self.client.clone();
            let cache = self.cache.clone();
            let semaphore = self.semaphore.clone();

            handles.push(tokio::spawn(async move {
                if let Some(story) = cache.get(id) {
                    return Some(story);
                }

                let _permit = semaphore.acquire().await.expect("Semaphore closed");

                match client.fetch_story(id).await {
                    Ok(story) => {
                        cache.put(story.clone());
                        Some(story)
                    }
                    Err(e) => {
                        tracing::debug!("Dropping story {}: {}", id, e);
                        None
                    }
                }
            }));
        }

        // Joining in spawn order keeps the upstream ranking intact.
        let mut stories = Vec::with_capacity(handles.len());
        for handle in handles {
            match handle.await {
                Ok(Some(story)) if story.url.is_some() => stories.push(story),
                Ok(_) => {}
                Err(e) => {
                    tracing::error!("Task join error: {}", e);
                }
            }
        }

        Ok(stories)
    }

    /// Resolve a single story, cache-first. Unlike `load_stories` this
    /// returns link-less posts too, for the detail view.
    pub async fn fetch_story(&self, id: u64) -> Result<Story> {
        if let Some(story) = self.cache.get(id) {
            return Ok(story);
        }

        let story = self.client.fetch_story(id).await?;
        self.cache.put(story.clone());
        Ok(story)
    }
}
