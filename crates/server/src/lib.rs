pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod openapi;
pub mod repositories;
pub mod state;

use std::net::SocketAddr;

use utoipa_scalar::{Scalar, Servable};

pub use api::create_router;
pub use config::{Config, Environment};
pub use db::create_pool;
pub use error::{AppError, AppResult};
pub use state::AppState;

pub async fn run_server(
    addr: SocketAddr,
    env: Environment,
    data_path: &str,
    rapidapi_key: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::new(env, data_path, rapidapi_key.to_string());

    // Ensure the data directory exists
    std::fs::create_dir_all(&config.data_path)?;

    let pool = create_pool(&config.database_url, config.max_connections).await?;
    let state = AppState::new(pool, config);

    let (router, api) = create_router(state);
    let app = router.merge(Scalar::with_url("/docs", api));

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
