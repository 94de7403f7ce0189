use anyhow::Context;

use storefront_api::config::ApiConfig;
use storefront_products::ProductStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    storefront_observability::init();

    let config = ApiConfig::from_env()?;
    if config.api_key.is_none() {
        tracing::warn!("API_KEY not set; every /api request will be rejected");
    }

    let app = storefront_api::app::build_app(config.api_key.clone(), ProductStore::seeded());

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
