use std::time::Duration;

use anyhow::Context as _;
use chrono::Local;
use clap::Parser;

use workshop_contract::timestamp;
use workshop_core::tracing::init_tracing;
use workshop_consumer::client::ProviderClient;
use workshop_consumer::config::ConsumerConfig;

#[derive(Parser)]
#[command(about = "Fetch provider data and print the derived ratio and timestamp")]
struct Args {
    /// Local date-time sent as `validDate` (default: now)
    valid_date: Option<String>,

    /// Provider base URL (overrides PROVIDER_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in milliseconds (overrides CONSUMER_TIMEOUT_MS)
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Send the request without `validDate`
    #[arg(long, conflicts_with = "valid_date")]
    no_date: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("warn");

    let args = Args::parse();
    let config = ConsumerConfig::from_env();
    let base_url = args.base_url.unwrap_or(config.provider_url);
    let timeout = args
        .timeout_ms
        .map(Duration::from_millis)
        .unwrap_or(config.timeout);

    let valid_date = if args.no_date {
        None
    } else {
        Some(
            args.valid_date
                .unwrap_or_else(|| timestamp::format_local(&Local::now().naive_local())),
        )
    };

    let client = ProviderClient::with_timeout(&base_url, timeout)?;
    let result = client
        .fetch_and_process_data(valid_date.as_deref())
        .await
        .with_context(|| format!("calling provider at {base_url}"))?;

    println!("{}", result.to_json());
    Ok(())
}
