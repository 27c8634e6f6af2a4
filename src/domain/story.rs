use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A single Hacker News item as returned by `item/{id}.json`.
///
/// Immutable once fetched; a re-fetch of the same ID replaces the
/// whole record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    pub url: Option<String>,
    #[serde(default)]
    pub score: i64,
    #[serde(default, rename = "by")]
    pub author: String,
    #[serde(default, rename = "time")]
    pub posted_at: i64,
    #[serde(default, rename = "descendants")]
    pub comment_count: i64,
    pub text: Option<String>,
    #[serde(default = "default_kind", rename = "type")]
    pub kind: String,
}

fn default_kind() -> String {
    "story".to_string()
}

impl Story {
    /// Host of the external URL with a leading `www.` stripped,
    /// or `None` for link-less posts.
    pub fn domain(&self) -> Option<String> {
        let url = self.url.as_deref()?;
        let parsed = url::Url::parse(url).ok()?;
        let host = parsed.host_str()?;
        Some(host.strip_prefix("www.").unwrap_or(host).to_string())
    }

    /// Compact relative age, e.g. "42m ago".
    pub fn time_ago(&self) -> String {
        let now = Utc::now().timestamp();
        let diff = (now - self.posted_at).max(0);

        match diff {
            d if d < 60 => format!("{}s ago", d),
            d if d < 3600 => format!("{}m ago", d / 60),
            d if d < 86400 => format!("{}h ago", d / 3600),
            d => format!("{}d ago", d / 86400),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story_with_url(url: Option<&str>) -> Story {
        Story {
            id: 1,
            title: "Test".into(),
            url: url.map(String::from),
            score: 10,
            author: "alice".into(),
            posted_at: 0,
            comment_count: 3,
            text: None,
            kind: "story".into(),
        }
    }

    #[test]
    fn test_deserialize_full_item() {
        let json = r#"{
            "id": 8863,
            "title": "My YC app",
            "url": "http://www.example.com/page",
            "score": 111,
            "by": "dhouston",
            "time": 1175714200,
            "descendants": 71,
            "type": "story"
        }"#;

        let story: Story = serde_json::from_str(json).unwrap();
        assert_eq!(story.id, 8863);
        assert_eq!(story.author, "dhouston");
        assert_eq!(story.posted_at, 1175714200);
        assert_eq!(story.comment_count, 71);
        assert_eq!(story.url.as_deref(), Some("http://www.example.com/page"));
    }

    #[test]
    fn test_deserialize_ask_hn_defaults() {
        // Ask HN posts carry text but no url or descendants
        let json = r#"{"id": 1, "title": "Ask HN: ?", "by": "bob", "time": 1, "text": "body"}"#;

        let story: Story = serde_json::from_str(json).unwrap();
        assert!(story.url.is_none());
        assert_eq!(story.score, 0);
        assert_eq!(story.comment_count, 0);
        assert_eq!(story.kind, "story");
        assert_eq!(story.text.as_deref(), Some("body"));
    }

    #[test]
    fn test_domain_strips_www() {
        let story = story_with_url(Some("https://www.rust-lang.org/learn"));
        assert_eq!(story.domain().as_deref(), Some("rust-lang.org"));
    }

    #[test]
    fn test_domain_plain_host() {
        let story = story_with_url(Some("https://blog.example.com/post"));
        assert_eq!(story.domain().as_deref(), Some("blog.example.com"));
    }

    #[test]
    fn test_domain_none_without_url() {
        let story = story_with_url(None);
        assert!(story.domain().is_none());
    }

    #[test]
    fn test_domain_none_for_invalid_url() {
        let story = story_with_url(Some("not a url"));
        assert!(story.domain().is_none());
    }

    #[test]
    fn test_time_ago_buckets() {
        let mut story = story_with_url(None);

        story.posted_at = Utc::now().timestamp() - 30;
        assert!(story.time_ago().ends_with("s ago"));

        story.posted_at = Utc::now().timestamp() - 300;
        assert!(story.time_ago().ends_with("m ago"));

        story.posted_at = Utc::now().timestamp() - 7200;
        assert!(story.time_ago().ends_with("h ago"));

        story.posted_at = Utc::now().timestamp() - 200_000;
        assert!(story.time_ago().ends_with("d ago"));
    }
}
