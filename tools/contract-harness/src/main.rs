//! Contract harness — verifies a provider against the contract interactions.
//!
//! # Usage
//!
//! ```bash
//! # Verify a running provider (started with PROVIDER_STATE_CHANGE_ENABLED=true)
//! cargo run -p contract-harness -- --base-url http://localhost:8080
//!
//! # Start the provider in-process and verify it
//! cargo run -p contract-harness -- --in-process
//! ```
//!
//! Exits 0 when all interactions pass, exits 1 when any fail.

use anyhow::{Result, bail};
use clap::Parser;

use contract_harness::config::ContractHarnessConfig;
use contract_harness::runner::Runner;
use contract_harness::{fixture, verify};
use workshop_core::tracing::init_tracing;

#[derive(Parser)]
#[command(about = "Verify a provider against the HTTP contract interactions")]
struct Args {
    /// Base URL of the provider (e.g. http://localhost:8080)
    #[arg(long, required_unless_present = "in_process")]
    base_url: Option<String>,

    /// Run only interactions for this service
    #[arg(long)]
    service: Option<String>,

    /// Start the provider in-process instead of using --base-url
    #[arg(long, conflicts_with = "base_url")]
    in_process: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    init_tracing("warn");

    let args = Args::parse();
    let config = ContractHarnessConfig::from_env();
    let workspace_root = fixture::workspace_root();

    let reporter = if args.in_process {
        run_in_process(&config, &workspace_root).await?
    } else {
        let Some(base_url) = args.base_url else {
            bail!("--base-url is required without --in-process");
        };
        let interactions = fixture::load_all(&workspace_root, args.service.as_deref())?;
        if interactions.is_empty() {
            eprintln!("No interactions found.");
            return Ok(());
        }
        println!(
            "Verifying {} interaction(s) against {}",
            interactions.len(),
            base_url
        );
        println!();
        let runner = Runner::new(&base_url, &config)?;
        verify(&runner, &interactions).await
    };

    if reporter.all_passed() {
        Ok(())
    } else {
        std::process::exit(1);
    }
}

#[cfg(feature = "provider")]
async fn run_in_process(
    config: &ContractHarnessConfig,
    workspace_root: &std::path::Path,
) -> Result<contract_harness::reporter::Reporter> {
    contract_harness::services::provider::run(config, workspace_root).await
}

#[cfg(not(feature = "provider"))]
async fn run_in_process(
    _config: &ContractHarnessConfig,
    _workspace_root: &std::path::Path,
) -> Result<contract_harness::reporter::Reporter> {
    bail!("--in-process needs the `provider` feature")
}
