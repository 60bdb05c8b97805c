//! The API client and its endpoint methods.
//!
//! Every method builds a fresh parameter mapping from its request, returns
//! early on a validation error, and otherwise sends exactly one GET.

use crate::config::ClientConfig;
use crate::dispatch::{Dispatcher, ReqwestTransport, Transport};
use crate::endpoints::{
    ConvertPriceRequest, GlobalMetricsRequest, HistoricalListingsRequest,
    HistoricalQuotesRequest, ListingsRequest, MapRequest, MarketPairsRequest, MetadataRequest,
    OhlcvHistoricalRequest, OhlcvLatestRequest, QuotesRequest,
};
use crate::error::CmcResult;
use crate::params::Params;
use anyhow::{Context, Result};
use tracing::debug;

/// One remote operation: where it lives and how its query is built.
pub trait Endpoint {
    /// Path appended to the API root, without a leading slash.
    const PATH: &'static str;

    /// Validates the request and builds its query parameters.
    fn to_params(&self) -> CmcResult<Params>;
}

/// Client for the CoinMarketCap Pro API.
///
/// Holds only immutable state and can be shared across threads.
pub struct CmcClient<T = ReqwestTransport> {
    config: ClientConfig,
    dispatcher: Dispatcher<T>,
}

impl CmcClient {
    /// Client against the production API with default settings.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let config = ClientConfig::builder()
            .api_key(api_key)
            .build()
            .context("Invalid client configuration")?;
        Self::from_config(config)
    }

    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(config.timeout())?;
        Self::with_transport(config, transport)
    }
}

impl<T: Transport> CmcClient<T> {
    /// Client running on a caller-supplied transport.
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self> {
        let dispatcher = Dispatcher::new(&config, transport)?;
        Ok(Self { config, dispatcher })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        self.dispatcher.transport()
    }

    /// Validates `request` and, if it passes, sends it.
    pub fn send<E: Endpoint>(&self, request: &E) -> CmcResult {
        let params = request.to_params().inspect_err(|e| {
            debug!(path = E::PATH, code = e.code(), "rejected before dispatch: {e}");
        })?;
        self.dispatcher.get(E::PATH, params)
    }

    /// Active (or inactive) cryptocurrencies with their CoinMarketCap ids.
    pub fn map(&self, request: &MapRequest) -> CmcResult {
        self.send(request)
    }

    /// Static metadata: logo, description, website and social links.
    pub fn metadata(&self, request: &MetadataRequest) -> CmcResult {
        self.send(request)
    }

    /// Latest market data for a page of cryptocurrencies.
    pub fn listings(&self, request: &ListingsRequest) -> CmcResult {
        self.send(request)
    }

    /// Listings as they stood on a given date.
    pub fn historical_listings(&self, request: &HistoricalListingsRequest) -> CmcResult {
        self.send(request)
    }

    pub fn quotes(&self, request: &QuotesRequest) -> CmcResult {
        self.send(request)
    }

    /// Point-in-time quotes over a time range.
    pub fn historical_quotes(&self, request: &HistoricalQuotesRequest) -> CmcResult {
        self.send(request)
    }

    pub fn market_pairs(&self, request: &MarketPairsRequest) -> CmcResult {
        self.send(request)
    }

    pub fn ohlcv_latest(&self, request: &OhlcvLatestRequest) -> CmcResult {
        self.send(request)
    }

    pub fn ohlcv_historical(&self, request: &OhlcvHistoricalRequest) -> CmcResult {
        self.send(request)
    }

    /// Total market cap, volume and dominance figures.
    pub fn global_metrics(&self, request: &GlobalMetricsRequest) -> CmcResult {
        self.send(request)
    }

    /// Converts an amount of one currency into one or more others.
    pub fn convert_price(&self, request: &ConvertPriceRequest) -> CmcResult {
        self.send(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::testing::{FailingTransport, RecordingTransport};
    use serde_json::json;
    use std::collections::BTreeMap;

    fn client() -> CmcClient<RecordingTransport> {
        let config = ClientConfig::builder().api_key("test-key").build().unwrap();
        CmcClient::with_transport(config, RecordingTransport::ok()).unwrap()
    }

    fn query(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn sent_path(client: &CmcClient<RecordingTransport>) -> String {
        client.transport().requests()[0].url.path().to_string()
    }

    #[test]
    fn test_convert_price_above_max_makes_no_call() {
        let client = client();
        let err = client
            .convert_price(&ConvertPriceRequest {
                amount: Some(json!(1.5e9)),
                symbol: Some("ETH".into()),
                convert: Some("USD".into()),
                ..Default::default()
            })
            .unwrap_err();

        assert_eq!(err.code(), 103);
        assert!(client.transport().requests().is_empty());
    }

    #[test]
    fn test_convert_price_below_min() {
        let client = client();
        let err = client
            .convert_price(&ConvertPriceRequest {
                amount: Some(json!(1e-9)),
                symbol: Some("ETH".into()),
                convert: Some("USD".into()),
                ..Default::default()
            })
            .unwrap_err();

        assert_eq!(err.code(), 103);
        assert!(client.transport().requests().is_empty());
    }

    #[test]
    fn test_convert_price_sends_amount() {
        let client = client();
        client
            .convert_price(&ConvertPriceRequest {
                amount: Some(json!(2)),
                symbol: Some("ETH".into()),
                convert: Some("USD".into()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(sent_path(&client), "/v1/tools/price-conversion");
        assert_eq!(
            client.transport().single_query(),
            query(&[("amount", "2"), ("convert", "USD"), ("symbol", "ETH")])
        );
    }

    #[test]
    fn test_metadata_without_identifier_makes_no_call() {
        let client = client();
        let err = client.metadata(&MetadataRequest::default()).unwrap_err();

        assert_eq!(err.code(), 101);
        assert_eq!(err.envelope().data, "No data");
        assert!(client.transport().requests().is_empty());
    }

    #[test]
    fn test_quotes_prefers_id() {
        let client = client();
        client
            .quotes(&QuotesRequest {
                id: Some("1".into()),
                symbol: Some("ETH".into()),
                ..Default::default()
            })
            .unwrap();

        let sent = client.transport().single_query();
        assert_eq!(sent.get("id").map(String::as_str), Some("1"));
        assert!(!sent.contains_key("symbol"));
        assert_eq!(sent_path(&client), "/v1/cryptocurrency/quotes/latest");
    }

    #[test]
    fn test_listings_bogus_sort() {
        let client = client();
        client
            .listings(&ListingsRequest {
                sort: Some("bogus_field".into()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(client.transport().single_query()["sort"], "market_cap");
    }

    #[test]
    fn test_historical_quotes_drops_bad_interval_and_proceeds() {
        let client = client();
        client
            .historical_quotes(&HistoricalQuotesRequest {
                symbol: Some("BTC".into()),
                interval: Some("99x".into()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(
            client.transport().single_query(),
            query(&[("symbol", "BTC")])
        );
        assert_eq!(sent_path(&client), "/v1/cryptocurrency/quotes/historical");
    }

    #[test]
    fn test_historical_listings_path_and_date() {
        let client = client();
        client
            .historical_listings(&HistoricalListingsRequest {
                date: Some("2019-06-19".into()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(sent_path(&client), "/v1/cryptocurrency/listings/latest");
        assert_eq!(
            client.transport().single_query(),
            query(&[("date", "2019-06-19"), ("limit", "100"), ("start", "1")])
        );
    }

    #[test]
    fn test_map_with_symbol() {
        let client = client();
        client
            .map(&MapRequest {
                symbol: Some("BTC, ETH".into()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(
            client.transport().single_query(),
            query(&[("symbol", "BTC,ETH")])
        );
    }

    #[test]
    fn test_global_metrics_path() {
        let client = client();
        client
            .global_metrics(&GlobalMetricsRequest {
                convert: Some("EUR".into()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(sent_path(&client), "/v1/global-metrics/quotes/latest");
        assert_eq!(client.transport().single_query(), query(&[("convert", "EUR")]));
    }

    #[test]
    fn test_every_call_uses_a_fresh_mapping() {
        let client = client();
        let request = ListingsRequest {
            limit: Some(json!(5)),
            convert: Some("EUR".into()),
            ..Default::default()
        };
        client.listings(&request).unwrap();
        client.listings(&ListingsRequest::default()).unwrap();

        let requests = client.transport().requests();
        assert_eq!(requests.len(), 2);
        let second: BTreeMap<String, String> =
            requests[1].url.query_pairs().into_owned().collect();
        assert_eq!(second, query(&[("limit", "100"), ("start", "1")]));
    }

    #[test]
    fn test_transport_failure_yields_envelope() {
        let config = ClientConfig::builder().api_key("test-key").build().unwrap();
        let client = CmcClient::with_transport(config, FailingTransport).unwrap();

        let err = client.global_metrics(&GlobalMetricsRequest::default()).unwrap_err();
        let envelope = err.envelope();
        assert_eq!(envelope.status.error_code, 100);
        assert!(envelope.status.error_message.contains("connection refused"));
    }

    #[test]
    fn test_client_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CmcClient>();
    }
}
