//! Error types for course provider operations

use crate::Platform;

/// Errors that can occur when querying course providers
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("YouTube error: {0}")]
    Youtube(#[from] youtube::YoutubeError),

    #[error("Udemy error: {0}")]
    Udemy(#[from] udemy::UdemyError),

    #[error("Coursera error: {0}")]
    Coursera(#[from] coursera::CourseraError),

    #[error("{0} search timed out")]
    Timeout(Platform),
}
