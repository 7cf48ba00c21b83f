mod client;
mod error;
pub mod models;
mod search;

pub use client::CourseraClient;
pub use error::CourseraError;
pub use models::{CourseCatalogResponse, CourseraCourse};

pub type Result<T> = std::result::Result<T, CourseraError>;
