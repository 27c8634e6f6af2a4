use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::aggregator::Aggregator;
use crate::domain::FeedKind;

/// Message type for the background preloader
#[derive(Debug)]
pub enum PreloadMessage {
    /// Warm the cache for a feed kind
    Preload(FeedKind),
    /// Shutdown the preloader
    Shutdown,
}

/// Handle to send messages to the background preloader
#[derive(Clone)]
pub struct PreloadHandle {
    tx: mpsc::Sender<PreloadMessage>,
}

impl PreloadHandle {
    /// Queue the other feed kinds for preloading.
    pub async fn preload_others(&self, current: FeedKind) {
        for kind in current.others() {
            self.preload(kind).await;
        }
    }

    pub async fn preload(&self, kind: FeedKind) {
        if let Err(e) = self.tx.send(PreloadMessage::Preload(kind)).await {
            warn!("Failed to queue {} feed for preload: {}", kind, e);
        }
    }

    pub async fn shutdown(&self) {
        let _ = self.tx.send(PreloadMessage::Shutdown).await;
    }
}

/// Background worker that warms the story cache for feeds the user has
/// not opened yet. Failures are swallowed; preloading never affects the
/// foreground load.
pub struct Preloader {
    aggregator: Arc<Aggregator>,
    limit: usize,
    rx: mpsc::Receiver<PreloadMessage>,
}

impl Preloader {
    pub fn new(aggregator: Arc<Aggregator>, limit: usize) -> (Self, PreloadHandle) {
        let (tx, rx) = mpsc::channel(16);
        let handle = PreloadHandle { tx };
        let preloader = Self {
            aggregator,
            limit,
            rx,
        };
        (preloader, handle)
    }

    pub async fn run(mut self) {
        info!("Preloader started");

        while let Some(msg) = self.rx.recv().await {
            match msg {
                PreloadMessage::Preload(kind) => {
                    match self.aggregator.load_stories(kind, self.limit).await {
                        Ok(stories) => {
                            debug!("Preloaded {} stories for {} feed", stories.len(), kind);
                        }
                        Err(e) => {
                            debug!("Preload of {} feed failed: {}", kind, e);
                        }
                    }
                }
                PreloadMessage::Shutdown => {
                    info!("Preloader shutting down");
                    break;
                }
            }
        }
    }
}

/// Spawn the preloader as a tokio task. The join handle completes once
/// a `Shutdown` message is processed.
pub fn spawn_preloader(
    aggregator: Arc<Aggregator>,
    limit: usize,
) -> (PreloadHandle, JoinHandle<()>) {
    let (preloader, handle) = Preloader::new(aggregator, limit);
    let task = tokio::spawn(preloader.run());
    (handle, task)
}
