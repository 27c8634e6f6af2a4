use std::path::Path;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use rusqlite_migration::{Migrations, M};

use crate::app::{EmberError, Result};
use crate::domain::Favorite;
use crate::store::FavoriteStore;

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.run_migrations()?;
        Ok(store)
    }

    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.run_migrations()?;
        Ok(store)
    }

    fn run_migrations(&self) -> Result<()> {
        let migrations = Migrations::new(vec![M::up(include_str!(
            "../../migrations/001-initial/up.sql"
        ))]);

        let mut conn = self.lock()?;
        migrations
            .to_latest(&mut conn)
            .map_err(|_| EmberError::Database(rusqlite::Error::InvalidQuery))?;

        Ok(())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|e| {
            EmberError::Database(rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error::new(1),
                Some(e.to_string()),
            ))
        })
    }

    fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
            .or_else(|| s.parse::<DateTime<Utc>>().ok())
    }

    fn row_to_favorite(row: &Row<'_>) -> rusqlite::Result<Favorite> {
        Ok(Favorite {
            id: row.get::<_, i64>(0)? as u64,
            title: row.get(1)?,
            url: row.get(2)?,
            author: row.get(3)?,
            posted_at: row
                .get::<_, String>(4)
                .ok()
                .and_then(|s| Self::parse_datetime(&s))
                .unwrap_or_else(Utc::now),
            score: row.get(5)?,
            comment_count: row.get(6)?,
            favorited_at: row
                .get::<_, String>(7)
                .ok()
                .and_then(|s| Self::parse_datetime(&s))
                .unwrap_or_else(Utc::now),
        })
    }
}

impl FavoriteStore for SqliteStore {
    fn add_favorite(&self, favorite: &Favorite) -> Result<()> {
        let conn = self.lock()?;

        conn.execute(
            "INSERT OR REPLACE INTO favorites
             (id, title, url, author, posted_at, score, comment_count, favorited_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                favorite.id as i64,
                favorite.title,
                favorite.url,
                favorite.author,
                favorite.posted_at.to_rfc3339(),
                favorite.score,
                favorite.comment_count,
                favorite.favorited_at.to_rfc3339()
            ],
        )?;

        Ok(())
    }

    fn get_favorite(&self, id: u64) -> Result<Option<Favorite>> {
        let conn = self.lock()?;

        let result = conn
            .query_row(
                "SELECT id, title, url, author, posted_at, score, comment_count, favorited_at
                 FROM favorites WHERE id = ?1",
                params![id as i64],
                Self::row_to_favorite,
            )
            .optional()?;

        Ok(result)
    }

    fn get_all_favorites(&self) -> Result<Vec<Favorite>> {
        let conn = self.lock()?;

        let mut stmt = conn.prepare(
            "SELECT id, title, url, author, posted_at, score, comment_count, favorited_at
             FROM favorites ORDER BY favorited_at DESC",
        )?;

        let favorites = stmt
            .query_map([], Self::row_to_favorite)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(favorites)
    }

    fn is_favorite(&self, id: u64) -> Result<bool> {
        let conn = self.lock()?;

        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM favorites WHERE id = ?1",
            params![id as i64],
            |row| row.get(0),
        )?;

        Ok(count > 0)
    }

    fn delete_favorite(&self, id: u64) -> Result<()> {
        let conn = self.lock()?;
        conn.execute("DELETE FROM favorites WHERE id = ?1", params![id as i64])?;
        Ok(())
    }

    fn delete_all_favorites(&self) -> Result<()> {
        let conn = self.lock()?;
        conn.execute("DELETE FROM favorites", [])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Story;
    use crate::store::toggle_favorite;

    fn story(id: u64, url: Option<&str>) -> Story {
        Story {
            id,
            title: format!("story {}", id),
            url: url.map(String::from),
            score: 10,
            author: "author".into(),
            posted_at: 1_700_000_000,
            comment_count: 2,
            text: None,
            kind: "story".into(),
        }
    }

    #[test]
    fn test_add_and_get_favorite() {
        let store = SqliteStore::in_memory().unwrap();
        let fav = Favorite::from_story(&story(1, Some("http://a")));
        store.add_favorite(&fav).unwrap();

        let retrieved = store.get_favorite(1).unwrap().unwrap();
        assert_eq!(retrieved.id, 1);
        assert_eq!(retrieved.title, "story 1");
        assert_eq!(retrieved.url.as_deref(), Some("http://a"));
        assert_eq!(retrieved.posted_at.timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_get_favorite_nonexistent() {
        let store = SqliteStore::in_memory().unwrap();
        assert!(store.get_favorite(999).unwrap().is_none());
    }

    #[test]
    fn test_add_replaces_existing() {
        let store = SqliteStore::in_memory().unwrap();

        let mut fav = Favorite::from_story(&story(1, Some("http://a")));
        store.add_favorite(&fav).unwrap();

        fav.title = "renamed".into();
        store.add_favorite(&fav).unwrap();

        let all = store.get_all_favorites().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "renamed");
    }

    #[test]
    fn test_favorites_ordered_by_favorited_at_desc() {
        let store = SqliteStore::in_memory().unwrap();

        let mut first = Favorite::from_story(&story(1, Some("http://a")));
        first.favorited_at = Utc::now() - chrono::Duration::hours(2);
        let mut second = Favorite::from_story(&story(2, Some("http://b")));
        second.favorited_at = Utc::now() - chrono::Duration::hours(1);
        let third = Favorite::from_story(&story(3, Some("http://c")));

        store.add_favorite(&first).unwrap();
        store.add_favorite(&third).unwrap();
        store.add_favorite(&second).unwrap();

        let ids: Vec<u64> = store
            .get_all_favorites()
            .unwrap()
            .iter()
            .map(|f| f.id)
            .collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_is_favorite_and_delete() {
        let store = SqliteStore::in_memory().unwrap();
        let fav = Favorite::from_story(&story(1, Some("http://a")));

        assert!(!store.is_favorite(1).unwrap());
        store.add_favorite(&fav).unwrap();
        assert!(store.is_favorite(1).unwrap());

        store.delete_favorite(1).unwrap();
        assert!(!store.is_favorite(1).unwrap());
    }

    #[test]
    fn test_delete_all_favorites() {
        let store = SqliteStore::in_memory().unwrap();
        for id in 1..=3 {
            store
                .add_favorite(&Favorite::from_story(&story(id, Some("http://a"))))
                .unwrap();
        }

        store.delete_all_favorites().unwrap();
        assert!(store.get_all_favorites().unwrap().is_empty());
    }

    #[test]
    fn test_toggle_twice_returns_to_unfavorited() {
        let store = SqliteStore::in_memory().unwrap();
        let story = story(5, Some("http://a"));

        assert!(toggle_favorite(&store, &story).unwrap());
        assert!(store.is_favorite(5).unwrap());

        assert!(!toggle_favorite(&store, &story).unwrap());
        assert!(!store.is_favorite(5).unwrap());
        assert!(store.get_all_favorites().unwrap().is_empty());
    }

    #[test]
    fn test_favorite_without_url_persists() {
        // Ask HN posts can be favorited even though they are never cached
        let store = SqliteStore::in_memory().unwrap();
        let fav = Favorite::from_story(&story(9, None));
        store.add_favorite(&fav).unwrap();

        let retrieved = store.get_favorite(9).unwrap().unwrap();
        assert!(retrieved.url.is_none());
    }
}
