//! Provider verification against an in-process provider (requires
//! `--features provider`).

use std::path::Path;

use anyhow::Result;
use tokio::net::TcpListener;
use workshop_contract::state::DEFAULT_DATA_COUNT;
use workshop_provider::{router::build_router, state::AppState};

use crate::{config::ContractHarnessConfig, fixture, reporter::Reporter, runner::Runner, verify};

/// Start a provider with the state-change endpoint on an OS-assigned port.
/// Returns its base URL.
pub async fn start() -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();

    let state = AppState::new(DEFAULT_DATA_COUNT, true);
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, build_router(state)).await {
            tracing::error!(error = %e, "in-process provider stopped");
        }
    });

    Ok(format!("http://127.0.0.1:{port}"))
}

/// Start the provider in-process and run all provider interactions.
pub async fn run(config: &ContractHarnessConfig, workspace_root: &Path) -> Result<Reporter> {
    let base_url = start().await?;
    tracing::info!(%base_url, "in-process provider started");

    let interactions = fixture::load_all(workspace_root, Some("provider"))?;
    let runner = Runner::new(&base_url, config)?;
    Ok(verify(&runner, &interactions).await)
}
