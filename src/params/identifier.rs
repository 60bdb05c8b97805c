use super::{non_empty_stripped, Params};
use crate::error::{CmcError, CmcResult};

/// Mutually exclusive ways of naming one or more coins.
///
/// Each field may hold a comma-separated list (`"1,1027"`, `"bitcoin, ethereum"`).
/// When several are set, `id` wins over `slug`, and `slug` over `symbol`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identifier<'a> {
    pub id: Option<&'a str>,
    pub slug: Option<&'a str>,
    pub symbol: Option<&'a str>,
}

impl Identifier<'_> {
    /// The winning key and its whitespace-free value, if any was supplied.
    pub fn select(&self) -> Option<(&'static str, String)> {
        [("id", self.id), ("slug", self.slug), ("symbol", self.symbol)]
            .into_iter()
            .find_map(|(key, value)| non_empty_stripped(value).map(|v| (key, v)))
    }
}

/// Writes the selected identifier into `params`.
///
/// With `required` set and nothing supplied this fails with a
/// missing-parameter error; otherwise `params` is left untouched.
pub fn select_identifier(
    params: &mut Params,
    identifier: Identifier<'_>,
    required: bool,
) -> CmcResult<()> {
    match identifier.select() {
        Some((key, value)) => {
            params.insert(key.to_string(), value);
            Ok(())
        }
        None if required => Err(CmcError::MissingParameter("id, slug or symbol")),
        None => Ok(()),
    }
}
