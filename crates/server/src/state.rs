use std::sync::Arc;
use std::time::Duration;

use catalog::{Aggregator, CourseProvider, CourseraProvider, UdemyProvider, YoutubeProvider};
use sqlx::SqlitePool;

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<Config>,
    pub youtube: Arc<YoutubeProvider>,
    pub udemy: Arc<UdemyProvider>,
    pub coursera: Arc<CourseraProvider>,
    pub aggregator: Arc<Aggregator>,
}

impl AppState {
    pub fn new(db: SqlitePool, config: Config) -> Self {
        // One HTTP client shared by every provider
        let http_client = reqwest::Client::new();

        let youtube = Arc::new(YoutubeProvider::with_http_client(
            http_client.clone(),
            config.rapidapi_key.clone(),
        ));
        let udemy = Arc::new(UdemyProvider::with_http_client(
            http_client.clone(),
            config.rapidapi_key.clone(),
        ));
        let coursera = Arc::new(CourseraProvider::with_http_client(
            http_client,
            config.rapidapi_key.clone(),
        ));

        let providers: Vec<Arc<dyn CourseProvider>> = vec![
            Arc::clone(&youtube) as Arc<dyn CourseProvider>,
            Arc::clone(&udemy) as Arc<dyn CourseProvider>,
            Arc::clone(&coursera) as Arc<dyn CourseProvider>,
        ];
        let aggregator = Aggregator::new(providers)
            .with_timeout(Duration::from_secs(config.search_timeout_secs));

        Self {
            db,
            config: Arc::new(config),
            youtube,
            udemy,
            coursera,
            aggregator: Arc::new(aggregator),
        }
    }
}
