use anyhow::Result;
use esim_site::{config::Config, server};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("esim_site=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .init();

    info!("Starting eSIM site server");

    // Load configuration from environment
    let config = Arc::new(Config::from_env()?);

    let app = server::app(Arc::clone(&config));
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
