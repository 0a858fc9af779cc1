// crates/finder-core/src/http.rs

//! HTTP client abstraction so the places client can be tested without a network.

use crate::config::DEFAULT_TIMEOUT_SECS;
use crate::error::{FinderError, Result};
use std::time::Duration;
use tracing::{debug, trace, warn};

const USER_AGENT: &str = concat!("restaurant-finder/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTP GET.
pub trait HttpClient: Send + Sync {
    /// Performs a GET and returns the body.
    ///
    /// # Errors
    ///
    /// [`FinderError::Http`] on transport failure or a non-2xx status.
    fn get(&self, url: &str) -> Result<Vec<u8>>;
}

/// Real HTTP client using blocking reqwest.
#[derive(Clone)]
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(timeout_secs: u64) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FinderError::Http(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> Result<Vec<u8>> {
        // The key travels in the query string; keep it out of the logs.
        let target = url.split('?').next().unwrap_or(url);
        trace!(url = target, "HTTP GET request starting");

        let response = self.client.get(url).send().map_err(|e| {
            warn!(
                url = target,
                is_connect = e.is_connect(),
                is_timeout = e.is_timeout(),
                "HTTP request failed"
            );
            FinderError::Http(format!("Request failed: {}", e.without_url()))
        })?;

        let status = response.status();
        debug!(url = target, status = status.as_u16(), "HTTP response received");
        if !status.is_success() {
            return Err(FinderError::Http(format!("HTTP {status} from {target}")));
        }

        response
            .bytes()
            .map(|b| b.to_vec())
            .map_err(|e| FinderError::Http(format!("Failed to read response: {}", e.without_url())))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Canned response plus a log of requested URLs.
    pub struct MockHttpClient {
        pub response: std::result::Result<Vec<u8>, String>,
        pub requests: Mutex<Vec<String>>,
    }

    impl MockHttpClient {
        pub fn ok(body: &str) -> Self {
            Self {
                response: Ok(body.as_bytes().to_vec()),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn err(msg: &str) -> Self {
            Self {
                response: Err(msg.to_string()),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl HttpClient for MockHttpClient {
        fn get(&self, url: &str) -> Result<Vec<u8>> {
            self.requests.lock().unwrap().push(url.to_string());
            self.response.clone().map_err(FinderError::Http)
        }
    }

    #[test]
    fn mock_records_each_request() {
        let mock = MockHttpClient::ok("{}");
        assert_eq!(mock.get("http://example.com/a").unwrap(), b"{}".to_vec());
        mock.get("http://example.com/b").unwrap();
        assert_eq!(mock.requests().len(), 2);
    }

    #[test]
    fn mock_error_is_an_http_error() {
        let mock = MockHttpClient::err("connection refused");
        assert!(matches!(mock.get("http://example.com"), Err(FinderError::Http(_))));
    }
}
