use super::{whitelisted, Params};
use strum::{EnumIter, EnumString, IntoStaticStr};

/// Fields the listing endpoints can sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum SortField {
    Name,
    Symbol,
    DateAdded,
    MarketCap,
    MarketCapStrict,
    Price,
    CirculatingSupply,
    TotalSupply,
    MaxSupply,
    NumMarketPairs,
    #[strum(serialize = "volume_24h")]
    Volume24h,
    #[strum(serialize = "percent_change_1h")]
    PercentChange1h,
    #[strum(serialize = "percent_change_24h")]
    PercentChange24h,
    #[strum(serialize = "percent_change_7d")]
    PercentChange7d,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum SortDir {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum CryptocurrencyType {
    All,
    Coins,
    Tokens,
}

/// Optional sort / direction / asset-type filters for listing requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListingModifiers<'a> {
    pub sort: Option<&'a str>,
    pub sort_dir: Option<&'a str>,
    pub cryptocurrency_type: Option<&'a str>,
}

/// Writes each supplied modifier, replacing unknown values with the API's
/// defaults (`market_cap`, `desc`, `all`). Absent modifiers are left out.
pub fn apply_listing_modifiers(params: &mut Params, modifiers: ListingModifiers<'_>) {
    if let Some(sort) = modifiers.sort {
        params.insert("sort".into(), whitelisted(sort, SortField::MarketCap).into());
    }
    if let Some(sort_dir) = modifiers.sort_dir {
        params.insert("sort_dir".into(), whitelisted(sort_dir, SortDir::Desc).into());
    }
    if let Some(kind) = modifiers.cryptocurrency_type {
        params.insert(
            "cryptocurrency_type".into(),
            whitelisted(kind, CryptocurrencyType::All).into(),
        );
    }
}
