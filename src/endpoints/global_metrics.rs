use crate::client::Endpoint;
use crate::error::CmcResult;
use crate::params::{select_convert, Params};

/// Aggregate market figures, optionally quoted in another currency.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlobalMetricsRequest {
    pub convert: Option<String>,
    pub convert_id: Option<String>,
}

impl Endpoint for GlobalMetricsRequest {
    const PATH: &'static str = "global-metrics/quotes/latest";

    fn to_params(&self) -> CmcResult<Params> {
        let mut params = Params::new();
        select_convert(
            &mut params,
            self.convert.as_deref(),
            self.convert_id.as_deref(),
            false,
        )?;
        Ok(params)
    }
}
