use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::path::Path;

const API_KEY_ENV_VAR: &str = "CMC_PRO_API_KEY";

/// Loads the Pro API key from the environment.
///
/// If you do not have an API key, request one from the CoinMarketCap developer portal.
pub(crate) fn load_api_key() -> Result<String> {
    let api_key = env::var(API_KEY_ENV_VAR)
        .with_context(|| format!("{API_KEY_ENV_VAR} must be set"))?;

    let api_key = api_key.trim();
    if api_key.is_empty() {
        bail!("{API_KEY_ENV_VAR} is set but empty");
    }

    Ok(api_key.to_string())
}

/// Reads the API key from the first line of a key file.
pub fn load_api_key_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read API key file {}", path.display()))?;

    let api_key = contents.lines().next().map(str::trim).unwrap_or_default();
    if api_key.is_empty() {
        bail!("API key file {} is empty", path.display());
    }

    Ok(api_key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_key_file_first_line_trimmed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "  0123-abcd  ").unwrap();
        writeln!(file, "ignored").unwrap();

        assert_eq!(load_api_key_file(file.path()).unwrap(), "0123-abcd");
    }

    #[test]
    fn test_empty_key_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(load_api_key_file(file.path()).is_err());
    }

    #[test]
    fn test_missing_key_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_api_key_file(dir.path().join("cmc_key.key")).unwrap_err();
        assert!(err.to_string().contains("Failed to read API key file"));
    }
}
