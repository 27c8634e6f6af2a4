use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::app::Result;
use crate::domain::Favorite;

pub const CSV_HEADER: &str = "ID,Title,URL,Author,Posted Time,Score,Comments,Favorited Time";

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render the favorites list as CSV, one row per favorite plus a header.
///
/// Free-text fields are quoted, with embedded double quotes doubled.
pub fn render_csv(favorites: &[Favorite]) -> String {
    let mut out = String::with_capacity(64 + favorites.len() * 128);
    out.push_str(CSV_HEADER);
    out.push('\n');

    for favorite in favorites {
        out.push_str(&format!(
            "{},\"{}\",\"{}\",\"{}\",{},{},{},{}\n",
            favorite.id,
            escape_csv(&favorite.title),
            favorite.url.as_deref().unwrap_or(""),
            escape_csv(&favorite.author),
            favorite.posted_at.format(DATE_FORMAT),
            favorite.score,
            favorite.comment_count,
            favorite.favorited_at.format(DATE_FORMAT),
        ));
    }

    out
}

/// Write the favorites list to a timestamped CSV file under `dir`,
/// creating the directory if needed. Returns the path of the new file.
pub fn export_favorites(favorites: &[Favorite], dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let file_name = format!(
        "hacker_news_favorites_{}.csv",
        Local::now().format("%Y%m%d_%H%M%S")
    );
    let path = dir.join(file_name);

    fs::write(&path, render_csv(favorites))?;
    tracing::info!("Exported {} favorites to {}", favorites.len(), path.display());

    Ok(path)
}

fn escape_csv(value: &str) -> String {
    value.replace('"', "\"\"")
}
