mod client;
mod error;
pub mod models;
mod search;

pub use client::YoutubeClient;
pub use error::YoutubeError;
pub use models::{SearchItem, SearchResponse, Thumbnail, Video};

pub type Result<T> = std::result::Result<T, YoutubeError>;
