use anyhow::Context as _;
use tracing::info;

use workshop_core::tracing::init_tracing;
use workshop_provider::config::ProviderConfig;
use workshop_provider::router::build_router;
use workshop_provider::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("info,tower_http=debug");

    let config = ProviderConfig::from_env();
    let state = AppState::new(config.data_count, config.state_change_enabled);

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.provider_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(
        data_count = config.data_count,
        state_change_enabled = config.state_change_enabled,
        "provider listening on {addr}"
    );
    axum::serve(listener, router).await.context("server error")
}
