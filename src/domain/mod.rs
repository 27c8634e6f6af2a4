pub mod favorite;
pub mod feed;
pub mod story;

pub use favorite::Favorite;
pub use feed::FeedKind;
pub use story::Story;
