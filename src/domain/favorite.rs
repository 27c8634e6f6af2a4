use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Story;

/// A locally persisted snapshot of a story the user marked for later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Favorite {
    pub id: u64,
    pub title: String,
    pub url: Option<String>,
    pub author: String,
    pub posted_at: DateTime<Utc>,
    pub score: i64,
    pub comment_count: i64,
    pub favorited_at: DateTime<Utc>,
}

impl Favorite {
    /// Snapshot a story at favorite time.
    pub fn from_story(story: &Story) -> Self {
        Self {
            id: story.id,
            title: story.title.clone(),
            url: story.url.clone(),
            author: story.author.clone(),
            posted_at: DateTime::from_timestamp(story.posted_at, 0).unwrap_or_else(Utc::now),
            score: story.score,
            comment_count: story.comment_count,
            favorited_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_story_snapshots_fields() {
        let story = Story {
            id: 42,
            title: "A title".into(),
            url: Some("http://example.com".into()),
            score: 99,
            author: "carol".into(),
            posted_at: 1_700_000_000,
            comment_count: 7,
            text: None,
            kind: "story".into(),
        };

        let fav = Favorite::from_story(&story);
        assert_eq!(fav.id, 42);
        assert_eq!(fav.title, "A title");
        assert_eq!(fav.url.as_deref(), Some("http://example.com"));
        assert_eq!(fav.author, "carol");
        assert_eq!(fav.posted_at.timestamp(), 1_700_000_000);
        assert_eq!(fav.score, 99);
        assert_eq!(fav.comment_count, 7);
    }
}
