use crate::client::Endpoint;
use crate::error::{CmcError, CmcResult};
use crate::params::{
    insert_trimmed, select_convert, select_identifier, validate_amount, Identifier, Params,
};
use serde_json::Value;

/// Converts `amount` of the coin named by `id` or `symbol`.
///
/// `amount`, an identifier and a target currency are all required. The
/// amount must lie within `[MIN_AMOUNT, MAX_AMOUNT]`.
///
/// [`MIN_AMOUNT`]: crate::params::MIN_AMOUNT
/// [`MAX_AMOUNT`]: crate::params::MAX_AMOUNT
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConvertPriceRequest {
    pub amount: Option<Value>,
    pub id: Option<String>,
    pub symbol: Option<String>,
    pub convert: Option<String>,
    pub convert_id: Option<String>,
    /// Historical conversion timestamp; latest prices when absent
    pub time: Option<String>,
}

impl Endpoint for ConvertPriceRequest {
    const PATH: &'static str = "tools/price-conversion";

    fn to_params(&self) -> CmcResult<Params> {
        let amount = self
            .amount
            .as_ref()
            .ok_or(CmcError::MissingParameter("amount"))?;
        let amount = validate_amount(amount)?;

        let mut params = Params::new();
        params.insert("amount".into(), amount.to_string());
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
            true,
        )?;
        insert_trimmed(&mut params, "time", self.time.as_deref());

        Ok(params)
    }
}
