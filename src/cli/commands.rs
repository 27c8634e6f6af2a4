use std::path::PathBuf;

use crate::app::{AppContext, EmberError, Result};
use crate::domain::{FeedKind, Story};
use crate::export;
use crate::session::{spawn_preloader, NewsState, Session};
use crate::store::{toggle_favorite, FavoriteStore};

pub fn parse_kind(kind: &str) -> Result<FeedKind> {
    kind.parse().map_err(EmberError::Other)
}

pub async fn list_stories(
    ctx: &AppContext,
    kind: FeedKind,
    limit: Option<usize>,
    force_refresh: bool,
    preload: bool,
) -> Result<()> {
    let limit = limit.unwrap_or(ctx.config.limit);

    let (mut session, mut rx) = Session::with_limit(ctx.aggregator.clone(), limit);
    session.load(kind, force_refresh).await;
    session.join().await;

    let mut state = NewsState::default();
    while let Ok(event) = rx.try_recv() {
        state.apply(event);
    }

    if let Some(message) = state.error {
        return Err(EmberError::Other(message));
    }

    if state.stories.is_empty() {
        println!("No stories");
        return Ok(());
    }

    for (rank, story) in state.stories.iter().enumerate() {
        let marker = if ctx.store.is_favorite(story.id)? {
            "★"
        } else {
            " "
        };
        println!(
            "{:>3}. {} {} ({})",
            rank + 1,
            marker,
            story.title,
            story.domain().unwrap_or_default()
        );
        println!(
            "       {} points by {} {} | {} comments | id {}",
            story.score,
            story.author,
            story.time_ago(),
            story.comment_count,
            story.id
        );
    }

    if preload {
        let (handle, task) = spawn_preloader(ctx.aggregator.clone(), limit);
        handle.preload_others(kind).await;
        handle.shutdown().await;
        let _ = task.await;
        println!("\nCache holds {} stories", ctx.cache.len());
    }

    Ok(())
}

pub async fn show_story(ctx: &AppContext, id: u64) -> Result<()> {
    let story = ctx.aggregator.fetch_story(id).await?;

    println!("{}", story.title);
    if let Some(url) = &story.url {
        println!("{}", url);
    }
    println!(
        "{} points by {} {} | {} comments",
        story.score,
        story.author,
        story.time_ago(),
        story.comment_count
    );
    if ctx.store.is_favorite(story.id)? {
        println!("★ favorited");
    }
    if let Some(text) = &story.text {
        println!("\n{}", text);
    }

    Ok(())
}

pub async fn open_story(ctx: &AppContext, id: u64) -> Result<()> {
    let story = ctx.aggregator.fetch_story(id).await?;
    let url = story
        .url
        .clone()
        .unwrap_or_else(|| discussion_url(&story));

    open::that(&url)?;
    println!("Opened {}", url);
    Ok(())
}

pub async fn fav_story(ctx: &AppContext, id: u64) -> Result<()> {
    let story = ctx.aggregator.fetch_story(id).await?;

    if toggle_favorite(ctx.store.as_ref(), &story)? {
        println!("Favorited: {}", story.title);
    } else {
        println!("Unfavorited: {}", story.title);
    }
    Ok(())
}

pub fn unfav_story(ctx: &AppContext, id: u64) -> Result<()> {
    if !ctx.store.is_favorite(id)? {
        println!("Not a favorite: {}", id);
        return Ok(());
    }

    ctx.store.delete_favorite(id)?;
    println!("Unfavorited: {}", id);
    Ok(())
}

pub fn list_favorites(ctx: &AppContext) -> Result<()> {
    let favorites = ctx.store.get_all_favorites()?;

    if favorites.is_empty() {
        println!("No favorites");
        return Ok(());
    }

    for favorite in favorites {
        println!(
            "{} ({})\n  favorited {} | {} points | {} comments | id {}",
            favorite.title,
            favorite.url.as_deref().unwrap_or("no link"),
            favorite.favorited_at.format("%Y-%m-%d %H:%M"),
            favorite.score,
            favorite.comment_count,
            favorite.id
        );
    }

    Ok(())
}

pub fn clear_favorites(ctx: &AppContext) -> Result<()> {
    ctx.store.delete_all_favorites()?;
    println!("Removed all favorites");
    Ok(())
}

pub fn export_favorites(ctx: &AppContext, output: Option<PathBuf>) -> Result<()> {
    let favorites = ctx.store.get_all_favorites()?;

    if favorites.is_empty() {
        println!("No favorites to export");
        return Ok(());
    }

    let dir = match output {
        Some(dir) => dir,
        None => dirs::download_dir().unwrap_or_else(|| PathBuf::from(".")),
    };

    let path = export::export_favorites(&favorites, &dir)?;
    println!("Exported {} favorites to {}", favorites.len(), path.display());
    Ok(())
}

fn discussion_url(story: &Story) -> String {
    format!("https://news.ycombinator.com/item?id={}", story.id)
}
