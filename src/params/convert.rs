use super::{non_empty_stripped, Params};
use crate::error::{CmcError, CmcResult};

/// Picks the quote currency: `convert_id` over `convert`.
///
/// Nothing supplied leaves `params` untouched (the API quotes in USD) unless
/// `required` is set.
pub fn select_convert(
    params: &mut Params,
    convert: Option<&str>,
    convert_id: Option<&str>,
    required: bool,
) -> CmcResult<()> {
    if let Some(convert_id) = non_empty_stripped(convert_id) {
        params.insert("convert_id".to_string(), convert_id);
    } else if let Some(convert) = non_empty_stripped(convert) {
        params.insert("convert".to_string(), convert);
    } else if required {
        return Err(CmcError::MissingParameter("convert or convert_id"));
    }
    Ok(())
}
