//! Concurrent fan-out across all configured course providers

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;

use crate::{Course, CourseProvider, Platform, ProviderError};

/// Default per-provider deadline for an aggregate search.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors that prevent an aggregate search from running at all
///
/// Individual provider failures are never surfaced here; they live in their
/// own [`ProviderOutcome`] slot.
#[derive(Debug, thiserror::Error)]
pub enum AggregateError {
    #[error("no course providers configured")]
    NoProviders,
}

/// Result slot for a single provider within an aggregate search
#[derive(Debug)]
pub struct ProviderOutcome {
    pub provider: &'static str,
    pub platform: Platform,
    pub result: Result<Vec<Course>, ProviderError>,
}

/// Fans a query out to every configured provider concurrently and waits for
/// all of them to settle before returning.
pub struct Aggregator {
    providers: Vec<Arc<dyn CourseProvider>>,
    timeout: Duration,
}

impl Aggregator {
    pub fn new(providers: Vec<Arc<dyn CourseProvider>>) -> Self {
        Self {
            providers,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the per-provider deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Query every provider concurrently and collect one slot per provider.
    ///
    /// This is a join barrier, not a race: the call returns only once every
    /// provider has produced a list, failed, or hit the deadline. A failing
    /// provider only affects its own slot; sibling results are returned
    /// intact. Fails only when no providers are configured.
    pub async fn aggregate(&self, query: &str) -> Result<Vec<ProviderOutcome>, AggregateError> {
        if self.providers.is_empty() {
            return Err(AggregateError::NoProviders);
        }

        let timeout = self.timeout;
        let searches = self.providers.iter().map(|provider| {
            let provider = Arc::clone(provider);
            async move {
                let result = match tokio::time::timeout(timeout, provider.search(query)).await {
                    Ok(result) => result,
                    Err(_) => Err(ProviderError::Timeout(provider.platform())),
                };
                ProviderOutcome {
                    provider: provider.name(),
                    platform: provider.platform(),
                    result,
                }
            }
        });

        let outcomes = join_all(searches).await;

        for outcome in &outcomes {
            if let Err(e) = &outcome.result {
                tracing::warn!("{} search failed: {}", outcome.provider, e);
            }
        }

        Ok(outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct StaticProvider {
        name: &'static str,
        platform: Platform,
        titles: Vec<&'static str>,
    }

    #[async_trait]
    impl CourseProvider for StaticProvider {
        async fn search(&self, _query: &str) -> Result<Vec<Course>, ProviderError> {
            Ok(self
                .titles
                .iter()
                .enumerate()
                .map(|(i, title)| Course {
                    id: i.to_string(),
                    title: title.to_string(),
                    url: format!("https://example.com/{}", i),
                    platform: self.platform,
                    price: None,
                    rating: None,
                    reviews: None,
                    thumbnail: None,
                })
                .collect())
        }

        fn platform(&self) -> Platform {
            self.platform
        }

        fn name(&self) -> &'static str {
            self.name
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl CourseProvider for FailingProvider {
        async fn search(&self, _query: &str) -> Result<Vec<Course>, ProviderError> {
            Err(ProviderError::Timeout(Platform::Udemy))
        }

        fn platform(&self) -> Platform {
            Platform::Udemy
        }

        fn name(&self) -> &'static str {
            "udemy"
        }
    }

    struct StalledProvider;

    #[async_trait]
    impl CourseProvider for StalledProvider {
        async fn search(&self, _query: &str) -> Result<Vec<Course>, ProviderError> {
            tokio::time::sleep(Duration::from_secs(600)).await;
            Ok(Vec::new())
        }

        fn platform(&self) -> Platform {
            Platform::Coursera
        }

        fn name(&self) -> &'static str {
            "coursera"
        }
    }

    #[tokio::test]
    async fn returns_one_slot_per_provider() {
        let aggregator = Aggregator::new(vec![
            Arc::new(StaticProvider {
                name: "youtube",
                platform: Platform::Youtube,
                titles: vec!["a", "b", "c"],
            }) as Arc<dyn CourseProvider>,
            Arc::new(StaticProvider {
                name: "udemy",
                platform: Platform::Udemy,
                titles: vec!["d"],
            }),
        ]);

        let outcomes = aggregator.aggregate("python").await.unwrap();
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].provider, "youtube");
        assert_eq!(outcomes[0].result.as_ref().unwrap().len(), 3);
        assert_eq!(outcomes[1].provider, "udemy");
        assert_eq!(outcomes[1].result.as_ref().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn failing_provider_does_not_poison_siblings() {
        let aggregator = Aggregator::new(vec![
            Arc::new(StaticProvider {
                name: "youtube",
                platform: Platform::Youtube,
                titles: vec!["a", "b", "c"],
            }) as Arc<dyn CourseProvider>,
            Arc::new(FailingProvider),
        ]);

        let outcomes = aggregator.aggregate("python").await.unwrap();
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].result.as_ref().unwrap().len(), 3);
        assert!(outcomes[1].result.is_err());
    }

    #[tokio::test]
    async fn stalled_provider_hits_the_deadline() {
        let aggregator = Aggregator::new(vec![
            Arc::new(StaticProvider {
                name: "youtube",
                platform: Platform::Youtube,
                titles: vec!["a"],
            }) as Arc<dyn CourseProvider>,
            Arc::new(StalledProvider),
        ])
        .with_timeout(Duration::from_millis(50));

        let outcomes = aggregator.aggregate("python").await.unwrap();
        assert_eq!(outcomes[0].result.as_ref().unwrap().len(), 1);
        assert!(matches!(
            outcomes[1].result,
            Err(ProviderError::Timeout(Platform::Coursera))
        ));
    }

    #[tokio::test]
    async fn no_providers_is_an_error() {
        let aggregator = Aggregator::new(Vec::new());
        assert!(matches!(
            aggregator.aggregate("python").await,
            Err(AggregateError::NoProviders)
        ));
    }
}
