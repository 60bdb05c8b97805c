//! Query parameter builders.
//!
//! Each builder takes caller input, validates or normalizes it and writes the
//! result into a [`Params`] mapping. Builders that fail closed return a
//! [`crate::CmcError`]; builders that fail open fall back to a default value
//! or leave their key out.

mod convert;
mod identifier;
mod interval;
mod listing;
mod numeric;

pub use convert::select_convert;
pub use identifier::{select_identifier, Identifier};
pub use interval::{apply_interval, Interval, IntervalSet};
pub use listing::{
    apply_listing_modifiers, CryptocurrencyType, ListingModifiers, SortDir, SortField,
};
pub use numeric::{
    apply_count, apply_pagination, clamp_count, clamp_limit, clamp_start, validate_amount,
    Pagination, MAX_AMOUNT, MAX_COUNT, MAX_LIMIT, MIN_AMOUNT,
};

use std::collections::BTreeMap;
use std::str::FromStr;

/// Query parameters for a single request. Built fresh per call.
pub type Params = BTreeMap<String, String>;

/// Removes every whitespace character, e.g. `"BTC, ETH"` -> `"BTC,ETH"`.
pub(crate) fn strip_whitespace(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Strips whitespace and treats an empty result as absent.
pub(crate) fn non_empty_stripped(value: Option<&str>) -> Option<String> {
    value.map(strip_whitespace).filter(|v| !v.is_empty())
}

/// Inserts a free-form value (dates, timestamps) trimmed, skipping empty input.
pub(crate) fn insert_trimmed(params: &mut Params, key: &str, value: Option<&str>) {
    if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
        params.insert(key.to_string(), value.to_string());
    }
}

/// Parses `value` against a whitelist enum, substituting `fallback` when it
/// does not match.
pub(crate) fn whitelisted<T>(value: &str, fallback: T) -> &'static str
where
    T: FromStr + Into<&'static str>,
{
    T::from_str(value).unwrap_or(fallback).into()
}
