use anyhow::{Context, Result};
use favicon_kit::config::load_config;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = load_config()?;
    let options = config.options()?;
    let base_path = config.base_path.clone();

    // Image work is CPU bound
    let app: axum::Router = tokio::task::spawn_blocking(move || {
        favicon_kit::router::<()>(&base_path, &options)
    })
    .await
    .context("Favicon setup task panicked")?
    .context("Failed to generate favicons")?;

    let listener = tokio::net::TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen))?;

    tracing::info!(addr = %config.listen, base_path = %config.base_path, "serving favicons");
    axum::serve(listener, app).await?;
    Ok(())
}
