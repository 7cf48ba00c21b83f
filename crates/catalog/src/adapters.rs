//! Provider adapters for the upstream course APIs

mod coursera_adapter;
mod udemy_adapter;
mod youtube_adapter;

pub use coursera_adapter::CourseraProvider;
pub use udemy_adapter::UdemyProvider;
pub use youtube_adapter::YoutubeProvider;
