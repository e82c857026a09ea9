use anyhow::Context;
use core_jb::common::logging::DEFAULT_API_LOG_DIRECTIVES;
use core_jb::{get_api_base_url, get_frontend_dir, select_store, setup_logging};

use api_jb::routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file, if it exists
    dotenvy::dotenv().ok();

    setup_logging(DEFAULT_API_LOG_DIRECTIVES);

    let store = select_store().await?;
    let store_backend = store.backend();
    let app = routes::router_with_frontend(&get_frontend_dir()).with_state(store);

    let addr = get_api_base_url().context("Invalid HOST or PORT")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to address: {}", addr))?;

    tracing::info!("Server running on {} ({} store)", addr, store_backend);
    axum::serve(listener, app).await?;
    Ok(())
}
