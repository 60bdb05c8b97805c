//! Request types, one per remote operation.
//!
//! Numeric arguments are `serde_json::Value` so input coming from JSON or
//! text is type-checked here instead of at the call site. Plain Rust numbers
//! convert with `.into()` or `json!`.

mod cryptocurrency;
mod global_metrics;
mod tools;

pub use cryptocurrency::{
    HistoricalListingsRequest, HistoricalQuotesRequest, ListingsRequest, MapRequest, MapStatus,
    MarketPairsRequest, MetadataRequest, OhlcvHistoricalRequest, OhlcvLatestRequest,
    QuotesRequest, TimePeriod,
};
pub use global_metrics::GlobalMetricsRequest;
pub use tools::ConvertPriceRequest;
