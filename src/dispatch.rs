//! Request dispatch: one blocking GET per call.

use crate::config::ClientConfig;
use crate::error::{CmcError, CmcResult};
use crate::params::Params;
use anyhow::{Context, Result};
use reqwest::redirect::Policy;
use reqwest::Url;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

const API_KEY_HEADER: &str = "X-CMC_PRO_API_KEY";
const MAX_REDIRECTS: usize = 10;

/// A fully built outbound request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// Endpoint URL including the query string.
    pub url: Url,
    pub headers: Vec<(&'static str, String)>,
}

/// The HTTP capability the client runs on.
///
/// Implementations perform exactly one exchange and return the raw body.
/// Errors mean the exchange did not complete; HTTP error statuses are not
/// errors at this level.
pub trait Transport: Send + Sync {
    fn get(&self, request: &HttpRequest) -> Result<String>;
}

/// Default transport backed by a reused `reqwest` blocking client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .redirect(Policy::limited(MAX_REDIRECTS))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    fn get(&self, request: &HttpRequest) -> Result<String> {
        let mut builder = self.client.get(request.url.clone());
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }

        let resp = builder.send().context("Failed to send request")?;
        resp.text().context("Failed to read response body")
    }
}

/// Joins endpoint paths onto the API root and applies the fixed headers.
pub(crate) struct Dispatcher<T> {
    base_url: Url,
    api_key: String,
    transport: T,
}

impl<T: Transport> Dispatcher<T> {
    pub(crate) fn new(config: &ClientConfig, transport: T) -> Result<Self> {
        let base_url = config.base_url_normalized();
        let base_url =
            Url::parse(&base_url).with_context(|| format!("Invalid API root url {base_url}"))?;

        Ok(Self {
            base_url,
            api_key: config.api_key.clone(),
            transport,
        })
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    fn headers(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Accept", "application/json".to_string()),
            (API_KEY_HEADER, self.api_key.clone()),
        ]
    }

    fn build(&self, path: &str, params: &Params) -> CmcResult<HttpRequest> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| CmcError::Connection(format!("invalid endpoint path {path}: {e}")))?;

        if !params.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(params.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }

        Ok(HttpRequest {
            url,
            headers: self.headers(),
        })
    }

    /// Sends one GET and decodes the body.
    ///
    /// The payload comes back untouched, including the API's own error
    /// responses. Only a failed exchange or a non-JSON body is an error.
    pub(crate) fn get(&self, path: &str, params: Params) -> CmcResult<Value> {
        let request = self.build(path, &params)?;
        debug!(
            path,
            params = ?params.keys().collect::<Vec<_>>(),
            "dispatching request"
        );

        let body = self.transport.get(&request).map_err(|e| {
            warn!(path, "request failed: {e:#}");
            CmcError::Connection(format!("{e:#}"))
        })?;

        serde_json::from_str(&body).map_err(|e| {
            warn!(path, "response is not JSON: {e}");
            CmcError::Connection(format!("invalid JSON response: {e}"))
        })
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Transport doubles for exercising the client without a network.

    use super::{HttpRequest, Transport};
    use anyhow::{anyhow, Result};
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    /// Records every request and answers with a fixed body.
    pub(crate) struct RecordingTransport {
        body: String,
        requests: Mutex<Vec<HttpRequest>>,
    }

    impl RecordingTransport {
        pub(crate) fn new(body: &str) -> Self {
            Self {
                body: body.to_string(),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn ok() -> Self {
            Self::new(r#"{"status":{"error_code":0,"error_message":null},"data":{}}"#)
        }

        pub(crate) fn requests(&self) -> Vec<HttpRequest> {
            self.requests.lock().unwrap().clone()
        }

        /// Query mapping of the only request sent so far.
        pub(crate) fn single_query(&self) -> BTreeMap<String, String> {
            let requests = self.requests();
            assert_eq!(requests.len(), 1, "expected exactly one request");
            requests[0].url.query_pairs().into_owned().collect()
        }
    }

    impl Transport for RecordingTransport {
        fn get(&self, request: &HttpRequest) -> Result<String> {
            self.requests.lock().unwrap().push(request.clone());
            Ok(self.body.clone())
        }
    }

    /// Fails every exchange, like an unreachable host.
    pub(crate) struct FailingTransport;

    impl Transport for FailingTransport {
        fn get(&self, _request: &HttpRequest) -> Result<String> {
            Err(anyhow!("connection refused").context("Failed to send request"))
        }
    }
}
