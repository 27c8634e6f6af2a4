pub mod preload;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::aggregator::{Aggregator, DEFAULT_LIMIT};
use crate::domain::{FeedKind, Story};

pub use preload::{spawn_preloader, PreloadHandle};

/// Snapshot of what a list view would render.
#[derive(Debug, Clone)]
pub struct NewsState {
    pub stories: Vec<Story>,
    pub selected_kind: FeedKind,
    pub is_loading: bool,
    pub is_refreshing: bool,
    pub error: Option<String>,
    pub cache_size: usize,
}

impl Default for NewsState {
    fn default() -> Self {
        Self {
            stories: Vec::new(),
            selected_kind: FeedKind::Top,
            is_loading: false,
            is_refreshing: false,
            error: None,
            cache_size: 0,
        }
    }
}

impl NewsState {
    /// Fold one event into the state.
    pub fn apply(&mut self, event: NewsEvent) {
        match event {
            NewsEvent::LoadStarted { kind, refreshing } => {
                self.selected_kind = kind;
                self.is_loading = !refreshing;
                self.is_refreshing = refreshing;
                self.error = None;
            }
            NewsEvent::StoriesLoaded {
                kind,
                stories,
                cache_size,
            } => {
                self.selected_kind = kind;
                self.stories = stories;
                self.is_loading = false;
                self.is_refreshing = false;
                self.error = None;
                self.cache_size = cache_size;
            }
            NewsEvent::LoadFailed { kind, message } => {
                self.selected_kind = kind;
                self.is_loading = false;
                self.is_refreshing = false;
                self.error = Some(message);
            }
        }
    }
}

/// Update emitted by a [`Session`] as loads progress.
#[derive(Debug)]
pub enum NewsEvent {
    LoadStarted {
        kind: FeedKind,
        refreshing: bool,
    },
    StoriesLoaded {
        kind: FeedKind,
        stories: Vec<Story>,
        cache_size: usize,
    },
    LoadFailed {
        kind: FeedKind,
        message: String,
    },
}

/// Drives story loads for a view, tracking one outstanding load at a time.
///
/// Starting a new load aborts the previous load's task; a superseded
/// load that slips past the abort is discarded by generation check, so
/// stale results never reach the event channel. In-flight item fetches
/// may still land in the story cache, which is harmless.
pub struct Session {
    aggregator: Arc<Aggregator>,
    events: mpsc::Sender<NewsEvent>,
    limit: usize,
    generation: Arc<AtomicU64>,
    load_task: Option<JoinHandle<()>>,
    selected_kind: FeedKind,
}

impl Session {
    pub fn new(aggregator: Arc<Aggregator>) -> (Self, mpsc::Receiver<NewsEvent>) {
        Self::with_limit(aggregator, DEFAULT_LIMIT)
    }

    pub fn with_limit(
        aggregator: Arc<Aggregator>,
        limit: usize,
    ) -> (Self, mpsc::Receiver<NewsEvent>) {
        let (tx, rx) = mpsc::channel(100);
        let session = Self {
            aggregator,
            events: tx,
            limit,
            generation: Arc::new(AtomicU64::new(0)),
            load_task: None,
            selected_kind: FeedKind::Top,
        };
        (session, rx)
    }

    pub fn selected_kind(&self) -> FeedKind {
        self.selected_kind
    }

    /// Start loading a feed, superseding any load still in flight.
    /// A force refresh clears the story cache first.
    pub async fn load(&mut self, kind: FeedKind, force_refresh: bool) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        if let Some(task) = self.load_task.take() {
            task.abort();
        }

        self.selected_kind = kind;

        let _ = self
            .events
            .send(NewsEvent::LoadStarted {
                kind,
                refreshing: force_refresh,
            })
            .await;

        if force_refresh {
            self.aggregator.cache().clear();
        }

        let aggregator = self.aggregator.clone();
        let events = self.events.clone();
        let limit = self.limit;
        let current = self.generation.clone();

        self.load_task = Some(tokio::spawn(async move {
            let result = aggregator.load_stories(kind, limit).await;

            if current.load(Ordering::SeqCst) != generation {
                tracing::debug!("Discarding superseded {} load", kind);
                return;
            }

            let event = match result {
                Ok(stories) => NewsEvent::StoriesLoaded {
                    kind,
                    stories,
                    cache_size: aggregator.cache().len(),
                },
                Err(e) => NewsEvent::LoadFailed {
                    kind,
                    message: e.to_string(),
                },
            };

            let _ = events.send(event).await;
        }));
    }

    /// Reload the currently selected feed, clearing the cache.
    pub async fn refresh(&mut self) {
        self.load(self.selected_kind, true).await;
    }

    /// Wait for the in-flight load, if any, to finish.
    pub async fn join(&mut self) {
        if let Some(task) = self.load_task.take() {
            let _ = task.await;
        }
    }
}
