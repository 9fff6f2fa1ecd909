use anyhow::Context;

use tilestock_api::app::{build_app, AppServices};
use tilestock_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tilestock_observability::init();

    let config = ApiConfig::from_env()?;
    let services = AppServices::from_config(&config).context("failed to wire services")?;
    let app = build_app(services);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;

    tracing::info!(addr = %listener.local_addr()?, seed_demo = config.seed_demo, "listening");

    axum::serve(listener, app).await?;
    Ok(())
}
