//! Course provider trait definition

use async_trait::async_trait;

use crate::{Course, Platform, ProviderError};

/// Unified search interface implemented by every upstream adapter
///
/// Each adapter issues exactly one upstream call per `search` and maps every
/// element of the native response into a [`Course`]. Results keep whatever
/// ordering the upstream returned; nothing is re-ranked here.
#[async_trait]
pub trait CourseProvider: Send + Sync {
    /// Search courses matching the query.
    async fn search(&self, query: &str) -> Result<Vec<Course>, ProviderError>;

    /// Platform tag stamped on every record this provider produces.
    fn platform(&self) -> Platform;

    /// Provider name used as the slot key in aggregate results and in logs.
    fn name(&self) -> &'static str;
}
