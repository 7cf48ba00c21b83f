use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use server::Environment;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let environment = Environment::from_str(&env::var("APP_ENV").unwrap_or_default());

    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()?;
    let data_path = env::var("DATA_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| environment.default_data_path());

    let rapidapi_key = env::var("RAPIDAPI_KEY").unwrap_or_default();
    if rapidapi_key.is_empty() {
        tracing::warn!("RAPIDAPI_KEY is not set; provider searches will fail");
    }

    let addr: SocketAddr = format!("0.0.0.0:{}", port).parse()?;

    server::run_server(
        addr,
        environment,
        &data_path.to_string_lossy(),
        &rapidapi_key,
    )
    .await
}
