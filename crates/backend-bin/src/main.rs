use roombooker_backend_lib::{config, router, AppState};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize configuration first so it can drive the log level
    let settings = config::load_settings()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_level.clone())),
        )
        .init();

    let bind_addr = settings.bind_addr;

    // Create application state
    let state = Arc::new(AppState::new(settings));

    // Create the router
    let app = router::create_router(state);

    // Start the server
    let listener = TcpListener::bind(&bind_addr).await?;
    info!(%bind_addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
