pub mod sqlite;

use crate::app::Result;
use crate::domain::{Favorite, Story};

pub use sqlite::SqliteStore;

pub trait FavoriteStore {
    /// Insert or replace a favorite, keyed by story ID.
    fn add_favorite(&self, favorite: &Favorite) -> Result<()>;
    fn get_favorite(&self, id: u64) -> Result<Option<Favorite>>;
    /// All favorites, most recently favorited first.
    fn get_all_favorites(&self) -> Result<Vec<Favorite>>;
    fn is_favorite(&self, id: u64) -> Result<bool>;
    fn delete_favorite(&self, id: u64) -> Result<()>;
    fn delete_all_favorites(&self) -> Result<()>;
}

/// Favorite the story if it isn't, unfavorite it if it is.
/// Returns the new favorited state.
pub fn toggle_favorite<S: FavoriteStore + ?Sized>(store: &S, story: &Story) -> Result<bool> {
    if store.is_favorite(story.id)? {
        store.delete_favorite(story.id)?;
        Ok(false)
    } else {
        store.add_favorite(&Favorite::from_story(story))?;
        Ok(true)
    }
}
