//! `/cryptocurrency/*` operations.

use crate::client::Endpoint;
use crate::error::{CmcError, CmcResult};
use crate::params::{
    apply_count, apply_interval, apply_listing_modifiers, apply_pagination, insert_trimmed,
    non_empty_stripped, select_convert, select_identifier, whitelisted, Identifier, IntervalSet,
    ListingModifiers, Pagination, Params,
};
use serde_json::Value;
use strum::{EnumString, IntoStaticStr};

const DEFAULT_START: i64 = 1;
const MAP_DEFAULT_LIMIT: i64 = 10;
const LISTINGS_DEFAULT_LIMIT: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum MapStatus {
    Active,
    Inactive,
}

/// OHLCV bucket size for `ohlcv/historical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum TimePeriod {
    Daily,
    Hourly,
}

/// `start`/`limit` with the caller's values, or the endpoint defaults.
fn paginate_with_defaults(
    params: &mut Params,
    start: Option<&Value>,
    limit: Option<&Value>,
    default_limit: i64,
) -> CmcResult<()> {
    let start = start.cloned().unwrap_or_else(|| Value::from(DEFAULT_START));
    let limit = limit.cloned().unwrap_or_else(|| Value::from(default_limit));
    apply_pagination(
        params,
        Pagination {
            start: Some(&start),
            limit: Some(&limit),
        },
    )
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapRequest {
    /// `active` (default) or `inactive`; anything else means `active`
    pub status: Option<String>,
    pub start: Option<Value>,
    pub limit: Option<Value>,
    /// Comma-separated symbols. When set, every other argument is ignored.
    pub symbol: Option<String>,
}

impl Endpoint for MapRequest {
    const PATH: &'static str = "cryptocurrency/map";

    fn to_params(&self) -> CmcResult<Params> {
        let mut params = Params::new();

        if let Some(symbol) = non_empty_stripped(self.symbol.as_deref()) {
            params.insert("symbol".into(), symbol);
            return Ok(params);
        }

        let status = self.status.as_deref().unwrap_or("active");
        params.insert("status".into(), whitelisted(status, MapStatus::Active).into());
        paginate_with_defaults(
            &mut params,
            self.start.as_ref(),
            self.limit.as_ref(),
            MAP_DEFAULT_LIMIT,
        )?;

        Ok(params)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataRequest {
    pub id: Option<String>,
    pub slug: Option<String>,
    pub symbol: Option<String>,
}

impl Endpoint for MetadataRequest {
    const PATH: &'static str = "cryptocurrency/info";

    fn to_params(&self) -> CmcResult<Params> {
        let mut params = Params::new();
        let identifier = Identifier {
            id: self.id.as_deref(),
            slug: self.slug.as_deref(),
            symbol: self.symbol.as_deref(),
        };
        select_identifier(&mut params, identifier, true)?;
        Ok(params)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingsRequest {
    pub start: Option<Value>,
    pub limit: Option<Value>,
    pub convert: Option<String>,
    pub convert_id: Option<String>,
    pub sort: Option<String>,
    pub sort_dir: Option<String>,
    pub cryptocurrency_type: Option<String>,
}

impl ListingsRequest {
    fn build(&self, params: &mut Params) -> CmcResult<()> {
        paginate_with_defaults(
            params,
            self.start.as_ref(),
            self.limit.as_ref(),
            LISTINGS_DEFAULT_LIMIT,
        )?;
        select_convert(
            params,
            self.convert.as_deref(),
            self.convert_id.as_deref(),
            false,
        )?;
        apply_listing_modifiers(
            params,
            ListingModifiers {
                sort: self.sort.as_deref(),
                sort_dir: self.sort_dir.as_deref(),
                cryptocurrency_type: self.cryptocurrency_type.as_deref(),
            },
        );
        Ok(())
    }
}

impl Endpoint for ListingsRequest {
    const PATH: &'static str = "cryptocurrency/listings/latest";

    fn to_params(&self) -> CmcResult<Params> {
        let mut params = Params::new();
        self.build(&mut params)?;
        Ok(params)
    }
}

/// Listings snapshot for a past date.
///
/// Sent to the listings route with a `date` argument.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoricalListingsRequest {
    /// ISO 8601 date or unix timestamp. Required.
    pub date: Option<String>,
    pub listing: ListingsRequest,
}

impl Endpoint for HistoricalListingsRequest {
    const PATH: &'static str = "cryptocurrency/listings/latest";

    fn to_params(&self) -> CmcResult<Params> {
        let mut params = Params::new();
        insert_trimmed(&mut params, "date", self.date.as_deref());
        if !params.contains_key("date") {
            return Err(CmcError::MissingParameter("date"));
        }
        self.listing.build(&mut params)?;
        Ok(params)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuotesRequest {
    pub id: Option<String>,
    pub slug: Option<String>,
    pub symbol: Option<String>,
    pub convert: Option<String>,
    pub convert_id: Option<String>,
}

impl Endpoint for QuotesRequest {
    const PATH: &'static str = "cryptocurrency/quotes/latest";

    fn to_params(&self) -> CmcResult<Params> {
        let mut params = Params::new();
        let identifier = Identifier {
            id: self.id.as_deref(),
            slug: self.slug.as_deref(),
            symbol: self.symbol.as_deref(),
        };
        select_identifier(&mut params, identifier, true)?;
        select_convert(
            &mut params,
            self.convert.as_deref(),
            self.convert_id.as_deref(),
            false,
        )?;
        Ok(params)
    }
}

/// Point-in-time quotes between `time_start` and `time_end`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoricalQuotesRequest {
    pub id: Option<String>,
    pub symbol: Option<String>,
    pub time_start: Option<String>,
    pub time_end: Option<String>,
    /// Number of data points, clamped to 1..=10000
    pub count: Option<Value>,
    /// Any interval, including the 5m..45m buckets
    pub interval: Option<String>,
    pub convert: Option<String>,
    pub convert_id: Option<String>,
}

impl Endpoint for HistoricalQuotesRequest {
    const PATH: &'static str = "cryptocurrency/quotes/historical";

    fn to_params(&self) -> CmcResult<Params> {
        let mut params = Params::new();
        let identifier = Identifier {
            id: self.id.as_deref(),
            slug: None,
            symbol: self.symbol.as_deref(),
        };
        select_identifier(&mut params, identifier, true)?;
        apply_count(&mut params, self.count.as_ref())?;
        insert_trimmed(&mut params, "time_start", self.time_start.as_deref());
        insert_trimmed(&mut params, "time_end", self.time_end.as_deref());
        apply_interval(&mut params, self.interval.as_deref(), IntervalSet::Full);
        select_convert(
            &mut params,
            self.convert.as_deref(),
            self.convert_id.as_deref(),
            false,
        )?;
        Ok(params)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketPairsRequest {
    pub id: Option<String>,
    pub slug: Option<String>,
    pub symbol: Option<String>,
    pub start: Option<Value>,
    pub limit: Option<Value>,
    pub convert: Option<String>,
    pub convert_id: Option<String>,
}

impl Endpoint for MarketPairsRequest {
    const PATH: &'static str = "cryptocurrency/market-pairs/latest";

    fn to_params(&self) -> CmcResult<Params> {
        let mut params = Params::new();
        let identifier = Identifier {
            id: self.id.as_deref(),
            slug: self.slug.as_deref(),
            symbol: self.symbol.as_deref(),
        };
        select_identifier(&mut params, identifier, true)?;
        apply_pagination(
            &mut params,
            Pagination {
                start: self.start.as_ref(),
                limit: self.limit.as_ref(),
            },
        )?;
        select_convert(
            &mut params,
            self.convert.as_deref(),
            self.convert_id.as_deref(),
            false,
        )?;
        Ok(params)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OhlcvLatestRequest {
    pub id: Option<String>,
    pub symbol: Option<String>,
    pub convert: Option<String>,
    pub convert_id: Option<String>,
}

impl Endpoint for OhlcvLatestRequest {
    const PATH: &'static str = "cryptocurrency/ohlcv/latest";

    fn to_params(&self) -> CmcResult<Params> {
        let mut params = Params::new();
        let identifier = Identifier {
            id: self.id.as_deref(),
            slug: None,
            symbol: self.symbol.as_deref(),
        };
        select_identifier(&mut params, identifier, true)?;
        select_convert(
            &mut params,
            self.convert.as_deref(),
            self.convert_id.as_deref(),
            false,
        )?;
        Ok(params)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OhlcvHistoricalRequest {
    pub id: Option<String>,
    pub slug: Option<String>,
    pub symbol: Option<String>,
    /// `daily` (default) or `hourly`
    pub time_period: Option<String>,
    pub time_start: Option<String>,
    pub time_end: Option<String>,
    pub count: Option<Value>,
    /// Hourly or coarser; sub-hour buckets are dropped
    pub interval: Option<String>,
    pub convert: Option<String>,
    pub convert_id: Option<String>,
}

impl Endpoint for OhlcvHistoricalRequest {
    const PATH: &'static str = "cryptocurrency/ohlcv/historical";

    fn to_params(&self) -> CmcResult<Params> {
        let mut params = Params::new();
        let identifier = Identifier {
            id: self.id.as_deref(),
            slug: self.slug.as_deref(),
            symbol: self.symbol.as_deref(),
        };
        select_identifier(&mut params, identifier, true)?;

        let time_period = self.time_period.as_deref().unwrap_or("daily");
        params.insert(
            "time_period".into(),
            whitelisted(time_period, TimePeriod::Daily).into(),
        );
        apply_count(&mut params, self.count.as_ref())?;
        insert_trimmed(&mut params, "time_start", self.time_start.as_deref());
        insert_trimmed(&mut params, "time_end", self.time_end.as_deref());
        apply_interval(&mut params, self.interval.as_deref(), IntervalSet::Coarse);
        select_convert(
            &mut params,
            self.convert.as_deref(),
            self.convert_id.as_deref(),
            false,
        )?;
        Ok(params)
    }
}
