//! Thesis registry server: reads settings from the environment, connects the pool, serves the API.
//!
//! Run from repo root: `cargo run -p registry-server`

use thesis_registry::{app, AppState, Settings};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("thesis_registry=info,registry_server=info,tower_http=info")
            }),
        )
        .init();

    let settings = Settings::from_env()?;
    let pool = settings.connect().await?;
    let state = AppState::new(pool)?;

    let listener = TcpListener::bind(settings.bind_addr()).await?;
    tracing::info!("thesis registry listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
