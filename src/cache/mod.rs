use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::Story;

/// Process-lifetime cache mapping story ID to a previously fetched record.
///
/// Concurrent fetch completions write through the same mutex, so a write
/// is never lost; concurrent writes to the same key are last-write-wins.
/// Only stories with an external URL are admitted.
#[derive(Default)]
pub struct StoryCache {
    entries: Mutex<HashMap<u64, Story>>,
}

impl StoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: u64) -> Option<Story> {
        self.lock().get(&id).cloned()
    }

    /// Insert a story, unless it lacks a URL (link-less posts are
    /// never cached).
    pub fn put(&self, story: Story) {
        if story.url.is_none() {
            return;
        }
        self.lock().insert(story.id, story);
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<u64, Story>> {
        // A poisoned lock means a panic mid-insert; the map itself is
        // still structurally sound, so keep going.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}
