use anyhow::{Context, Result};
use referent::{
    api,
    app_state::AppState,
    config::{Config, LogFormat},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    init_tracing(config.log_format());

    // Refuse to start without a credential rather than failing every request.
    config
        .require_api_key()
        .context("Completion API key must be configured")?;

    let state = AppState::from_config(&config).context("Failed to build application state")?;
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr()))?;

    info!(addr = %config.bind_addr(), model = %config.model(), "Listening");
    axum::serve(listener, app).await?;
    Ok(())
}
