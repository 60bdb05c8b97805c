//! Blocking client for the CoinMarketCap Pro API.
//!
//! Arguments are validated and normalized locally before anything is sent.
//! Responses are returned as decoded JSON without reinterpretation, so API
//! errors reach the caller in the provider's own shape; local failures use
//! the same `{status, data}` shape via [`CmcError::envelope`].
//!
//! ```no_run
//! use cmc_client::{CmcClient, QuotesRequest};
//!
//! let client = CmcClient::new("your-api-key")?;
//! let quotes = client.quotes(&QuotesRequest {
//!     slug: Some("ethereum".into()),
//!     ..Default::default()
//! })?;
//! println!("{}", quotes["data"]);
//! # Ok::<(), anyhow::Error>(())
//! ```

mod client;
mod config;
mod dispatch;
mod endpoints;
mod error;
pub mod params;
mod response;

pub use client::{CmcClient, Endpoint};
pub use config::{
    load_api_key_file, ClientConfig, ClientConfigBuilder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT,
    SANDBOX_BASE_URL,
};
pub use dispatch::{HttpRequest, ReqwestTransport, Transport};
pub use endpoints::{
    ConvertPriceRequest, GlobalMetricsRequest, HistoricalListingsRequest,
    HistoricalQuotesRequest, ListingsRequest, MapRequest, MapStatus, MarketPairsRequest,
    MetadataRequest, OhlcvHistoricalRequest, OhlcvLatestRequest, QuotesRequest, TimePeriod,
};
pub use error::{
    CmcError, CmcResult, EnvelopeStatus, ErrorEnvelope, CONNECTION_ERROR, MISSING_PARAMETER,
    OUT_OF_RANGE, TYPE_ERROR,
};
pub use response::{into_payload, ApiStatus};
