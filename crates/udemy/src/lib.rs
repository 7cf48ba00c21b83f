mod client;
mod error;
pub mod models;
mod search;

pub use client::UdemyClient;
pub use error::UdemyError;
pub use models::{Price, Purchase, SearchRequest, SearchResponse, UdemyCourse};

pub type Result<T> = std::result::Result<T, UdemyError>;
