//! # ember
//!
//! A terminal-first Hacker News reader: three ranked feeds, story
//! detail, local favorites with CSV export.
//!
//! ## Architecture
//!
//! ```text
//! HnClient → Aggregator → StoryCache
//!                ↓
//!             Session → events → view (CLI)
//! ```
//!
//! - [`client`]: typed access to the Hacker News Firebase API
//! - [`aggregator`]: bounded-concurrency ID resolution with caching
//! - [`session`]: load lifecycle, state events, background preloading
//! - [`store`]: SQLite-backed favorites
//! - [`export`]: CSV export of the favorites list

/// Application context and error handling.
///
/// [`AppContext`](app::AppContext) wires together client, cache,
/// aggregator and favorites store.
pub mod app;

/// Bounded-concurrency resolution of feed IDs into story records.
pub mod aggregator;

/// In-memory story cache shared by concurrent fetches.
pub mod cache;

/// Hacker News API client.
///
/// - [`HnClient`](client::HnClient): async trait over the two API calls
/// - [`HttpClient`](client::http::HttpClient): reqwest-based implementation
pub mod client;

/// Command-line interface using clap.
pub mod cli;

/// Configuration loaded from `~/.config/ember/config.toml`.
pub mod config;

/// Core domain models.
///
/// - [`FeedKind`](domain::FeedKind): top/new/best
/// - [`Story`](domain::Story): one upstream item
/// - [`Favorite`](domain::Favorite): locally persisted story snapshot
pub mod domain;

/// CSV export of favorites.
pub mod export;

/// Load sessions: explicit view state, event channel, preloader.
pub mod session;

/// SQLite persistence for favorites.
///
/// - [`FavoriteStore`](store::FavoriteStore): trait defining storage operations
/// - [`SqliteStore`](store::SqliteStore): SQLite implementation
pub mod store;
