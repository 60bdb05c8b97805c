use anyhow::{ensure, Context, Result};
use clap::Parser;
use cmc_client::{
    into_payload, load_api_key_file, ApiStatus, ClientConfig, CmcClient, CmcResult,
    ConvertPriceRequest, GlobalMetricsRequest, ListingsRequest, MapRequest, MetadataRequest,
    QuotesRequest, SANDBOX_BASE_URL,
};
use serde_json::json;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing::{info, warn};
use tracing_subscriber::filter::Targets;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Calls a handful of endpoints and reports which ones answer cleanly.
#[derive(Parser, Debug)]
#[command(name = "cmc-smoke", version, about)]
struct SmokeArgs {
    /// File whose first line is the API key. Falls back to CMC_PRO_API_KEY.
    #[arg(long, env = "CMC_KEY_FILE")]
    key_file: Option<PathBuf>,

    /// Run against the sandbox API
    #[arg(long)]
    sandbox: bool,
}

fn main() -> Result<()> {
    init_logging().context("initializing logging")?;
    let args = SmokeArgs::parse();

    let client = CmcClient::from_config(config(&args)?)?;
    info!(target: "plain", "Checking {}", client.config().base_url());

    let checks: [(&str, CmcResult); 6] = [
        ("map", client.map(&MapRequest::default())),
        (
            "metadata",
            client.metadata(&MetadataRequest {
                slug: Some("bitcoin,ethereum,litecoin".into()),
                ..Default::default()
            }),
        ),
        (
            "listings",
            client.listings(&ListingsRequest {
                start: Some(json!(1)),
                limit: Some(json!(5)),
                convert: Some("EUR".into()),
                sort: Some("market_cap".into()),
                ..Default::default()
            }),
        ),
        (
            "quotes",
            client.quotes(&QuotesRequest {
                slug: Some("ethereum".into()),
                ..Default::default()
            }),
        ),
        (
            "global_metrics",
            client.global_metrics(&GlobalMetricsRequest::default()),
        ),
        (
            "convert_price",
            client.convert_price(&ConvertPriceRequest {
                amount: Some(json!(2)),
                symbol: Some("ETH".into()),
                convert: Some("USD".into()),
                ..Default::default()
            }),
        ),
    ];

    let failures = checks
        .into_iter()
        .map(|(name, result)| report(name, result))
        .filter(|passed| !passed)
        .count();

    ensure!(failures == 0, "{failures} endpoint check(s) failed");
    Ok(())
}

fn config(args: &SmokeArgs) -> Result<ClientConfig> {
    let config = match &args.key_file {
        Some(path) => ClientConfig::builder()
            .api_key(load_api_key_file(path)?)
            .build()?,
        None => ClientConfig::from_env()?,
    };

    if args.sandbox {
        return Ok(config.with_base_url(SANDBOX_BASE_URL));
    }
    Ok(config)
}

/// Prints the outcome of one check; true when the API reported no error.
fn report(name: &str, result: CmcResult) -> bool {
    let payload = into_payload(result);
    match ApiStatus::from_payload(&payload) {
        Some(status) if status.is_ok() => {
            info!(target: "plain", "{name} works!");
            true
        }
        Some(status) => {
            warn!(
                code = status.error_code,
                "{name} failed: {}",
                status.error_message.unwrap_or_default()
            );
            false
        }
        None => {
            warn!("{name} returned a payload without a status object");
            false
        }
    }
}

fn init_logging() -> Result<()> {
    // bare report lines, emitted with target "plain"
    let plain_fmt = tracing_subscriber::fmt::format()
        .without_time()
        .with_level(false)
        .with_target(false)
        .compact();
    let plain_layer = tracing_subscriber::fmt::layer()
        .event_format(plain_fmt)
        .with_filter(Targets::new().with_target("plain", LevelFilter::TRACE));

    // diagnostics from the library: RUST_LOG, else warnings plus our info
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,cmc_client=info,cmc_smoke=info"));

    let rich_layer = tracing_subscriber::fmt::layer().with_filter(filter);

    tracing_subscriber::registry()
        .with(plain_layer)
        .with(rich_layer)
        .init();

    Ok(())
}
