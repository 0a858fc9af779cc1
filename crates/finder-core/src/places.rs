// crates/finder-core/src/places.rs

//! # Places Search Client
//!
//! One nearby search per call, no pagination, no retry. A request is
//! `{center, radius, type=restaurant}`; a response is a status code plus a
//! list of place records.
//!
//! Status handling:
//! - `OK` with records → [`SearchOutcome::Ready`]
//! - `ZERO_RESULTS` (or `OK` with nothing in it) → [`SearchOutcome::Empty`]
//! - anything else (`OVER_QUERY_LIMIT`, `REQUEST_DENIED`, `INVALID_REQUEST`, ...)
//!   → [`SearchOutcome::Failed`] carrying the literal status.

use crate::error::Result;
use crate::model::{PlaceResult, SearchOutcome, SearchQuery};
use serde::{Deserialize, Serialize};

pub const STATUS_OK: &str = "OK";
pub const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

/// Anything that can answer a nearby search.
pub trait PlacesSearch {
    fn search(&self, query: &SearchQuery) -> SearchOutcome;
}

impl<T: PlacesSearch + ?Sized> PlacesSearch for &T {
    fn search(&self, query: &SearchQuery) -> SearchOutcome {
        (**self).search(query)
    }
}

impl<T: PlacesSearch + ?Sized> PlacesSearch for Box<T> {
    fn search(&self, query: &SearchQuery) -> SearchOutcome {
        (**self).search(query)
    }
}

// -----------------------------------------------------------------------------
// WIRE FORMAT
// -----------------------------------------------------------------------------

/// Nearby search response body.
///
/// The browser front end builds the same shape from the Maps JS callback
/// (`{status, results}`), so both transports share [`Self::into_outcome`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbySearchResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<PlaceResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl NearbySearchResponse {
    /// Classifies the response, keeping the remote result order.
    ///
    /// ```rust
    /// use finder_core::{NearbySearchResponse, SearchOutcome};
    ///
    /// let body = r#"{"status":"OVER_QUERY_LIMIT","results":[]}"#;
    /// let resp: NearbySearchResponse = serde_json::from_str(body).unwrap();
    /// assert_eq!(resp.into_outcome(), SearchOutcome::Failed("OVER_QUERY_LIMIT".into()));
    /// ```
    pub fn into_outcome(self) -> SearchOutcome {
        match self.status.as_str() {
            STATUS_OK if !self.results.is_empty() => SearchOutcome::Ready(self.results),
            STATUS_OK | STATUS_ZERO_RESULTS => SearchOutcome::Empty,
            _ => SearchOutcome::Failed(self.status),
        }
    }

    /// Decodes a raw body.
    ///
    /// # Errors
    ///
    /// [`crate::FinderError::Json`] if the body is not a nearby search response.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        let resp: NearbySearchResponse = serde_json::from_slice(body)?;
        if let Some(msg) = &resp.error_message {
            tracing::debug!(status = %resp.status, message = %msg, "places service message");
        }
        Ok(resp)
    }

    /// Decodes and classifies a raw body. Undecodable bodies count as a
    /// failed search.
    pub fn outcome_from_slice(body: &[u8]) -> SearchOutcome {
        match Self::from_slice(body) {
            Ok(resp) => resp.into_outcome(),
            Err(e) => {
                tracing::warn!(error = %e, "Undecodable places response");
                SearchOutcome::Failed(format!("invalid response: {e}"))
            }
        }
    }
}

// -----------------------------------------------------------------------------
// GOOGLE PLACES (native transport)
// -----------------------------------------------------------------------------

#[cfg(feature = "http")]
pub use self::google::GooglePlacesClient;

#[cfg(feature = "http")]
mod google {
    use super::{NearbySearchResponse, PlacesSearch};
    use crate::config::FinderConfig;
    use crate::error::{FinderError, Result};
    use crate::http::{HttpClient, ReqwestClient};
    use crate::model::{SearchOutcome, SearchQuery};
    use tracing::{debug, info, warn};

    /// Nearby search against the Places web service.
    pub struct GooglePlacesClient<C: HttpClient> {
        http_client: C,
        api_key: String,
        endpoint: String,
    }

    impl GooglePlacesClient<ReqwestClient> {
        /// Builds a client with a real HTTP transport from configuration.
        pub fn from_config(config: &FinderConfig) -> Result<Self> {
            let http = ReqwestClient::with_timeout(config.timeout_secs)?;
            Ok(Self::new(http, config.api_key.clone(), config.endpoint.clone()))
        }
    }

    impl<C: HttpClient> GooglePlacesClient<C> {
        pub fn new(http_client: C, api_key: String, endpoint: String) -> Self {
            Self {
                http_client,
                api_key,
                endpoint,
            }
        }

        /// `{endpoint}?location=lat,lng&radius=r&type=restaurant&key=...`
        pub fn build_url(&self, query: &SearchQuery) -> Result<String> {
            let location = query.center.to_string();
            let radius = query.radius.to_string();
            let url = reqwest::Url::parse_with_params(
                &self.endpoint,
                &[
                    ("location", location.as_str()),
                    ("radius", radius.as_str()),
                    ("type", query.category()),
                    ("key", self.api_key.as_str()),
                ],
            )
            .map_err(|e| FinderError::Http(format!("bad endpoint '{}': {e}", self.endpoint)))?;
            Ok(url.into())
        }

        fn fetch(&self, query: &SearchQuery) -> Result<Vec<u8>> {
            let url = self.build_url(query)?;
            self.http_client.get(&url)
        }
    }

    impl<C: HttpClient> PlacesSearch for GooglePlacesClient<C> {
        fn search(&self, query: &SearchQuery) -> SearchOutcome {
            debug!(
                center = %query.center,
                radius = query.radius,
                "Searching for restaurants"
            );

            let outcome = match self.fetch(query) {
                Ok(body) => NearbySearchResponse::outcome_from_slice(&body),
                Err(e) => SearchOutcome::Failed(e.to_string()),
            };

            match &outcome {
                SearchOutcome::Ready(results) => {
                    info!(count = results.len(), "Places API response status: OK")
                }
                SearchOutcome::Empty => info!("Places API response status: ZERO_RESULTS"),
                SearchOutcome::Failed(status) => {
                    warn!(status = %status, "Places API search failed")
                }
            }
            outcome
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::http::tests::MockHttpClient;
        use crate::model::{Coordinate, PlaceResult};

        const ENDPOINT: &str = "https://maps.example.com/nearbysearch/json";

        fn client(mock: MockHttpClient) -> GooglePlacesClient<MockHttpClient> {
            GooglePlacesClient::new(mock, "test-key".into(), ENDPOINT.into())
        }

        fn query() -> SearchQuery {
            SearchQuery::new(Coordinate::new(37.0, -122.0), 1500)
        }

        #[test]
        fn url_carries_location_radius_type_and_key() {
            let c = client(MockHttpClient::ok("{}"));
            let url = c.build_url(&query()).unwrap();
            assert!(url.starts_with(ENDPOINT));
            assert!(url.contains("location=37%2C-122"));
            assert!(url.contains("radius=1500"));
            assert!(url.contains("type=restaurant"));
            assert!(url.contains("key=test-key"));
        }

        #[test]
        fn one_request_per_search() {
            let c = client(MockHttpClient::ok(r#"{"status":"ZERO_RESULTS","results":[]}"#));
            assert_eq!(c.search(&query()), SearchOutcome::Empty);
            assert_eq!(c.http_client.requests().len(), 1);
        }

        #[test]
        fn ok_response_keeps_remote_order() {
            let body = r#"{
                "status": "OK",
                "results": [
                    {"place_id": "b", "name": "Second Bite", "vicinity": "2 Main St",
                     "geometry": {"location": {"lat": 37.001, "lng": -122.001}}},
                    {"place_id": "a", "name": "First Fork", "vicinity": "1 Main St",
                     "geometry": {"location": {"lat": 37.002, "lng": -122.002}}}
                ],
                "next_page_token": "ignored"
            }"#;
            let c = client(MockHttpClient::ok(body));

            let SearchOutcome::Ready(results) = c.search(&query()) else {
                panic!("expected results");
            };
            let ids: Vec<_> = results.iter().map(|r| r.id.as_str()).collect();
            assert_eq!(ids, ["b", "a"]);
            assert_eq!(
                results[0],
                PlaceResult::new("b", "Second Bite", "2 Main St", Coordinate::new(37.001, -122.001))
            );
        }

        #[test]
        fn transport_error_is_a_failed_search() {
            let c = client(MockHttpClient::err("connection refused"));
            match c.search(&query()) {
                SearchOutcome::Failed(msg) => assert!(msg.contains("connection refused")),
                other => panic!("unexpected outcome {other:?}"),
            }
        }

        #[test]
        fn garbage_body_is_a_failed_search() {
            let c = client(MockHttpClient::ok("<html>nope</html>"));
            assert!(matches!(c.search(&query()), SearchOutcome::Failed(_)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(body: &str) -> SearchOutcome {
        NearbySearchResponse::outcome_from_slice(body.as_bytes())
    }

    #[test]
    fn zero_results_is_empty_not_failed() {
        assert_eq!(outcome(r#"{"status":"ZERO_RESULTS","results":[]}"#), SearchOutcome::Empty);
        assert_eq!(outcome(r#"{"status":"OK","results":[]}"#), SearchOutcome::Empty);
    }

    #[test]
    fn unknown_status_is_failed_with_literal_text() {
        assert_eq!(
            outcome(r#"{"status":"REQUEST_DENIED","error_message":"bad key"}"#),
            SearchOutcome::Failed("REQUEST_DENIED".into())
        );
    }

    #[test]
    fn undecodable_body_is_a_json_error() {
        let err = NearbySearchResponse::from_slice(b"{\"results\":[]}").unwrap_err();
        assert!(matches!(err, crate::FinderError::Json(_)));

        match outcome("not json") {
            SearchOutcome::Failed(status) => assert!(status.starts_with("invalid response: JSON error")),
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn js_api_records_decode_too() {
        let body = r#"{"status":"OK","results":[
            {"id":"x1","name":"Taqueria","vicinity":"5 Oak Ave",
             "geometry":{"location":{"lat":1.5,"lng":2.5}}}
        ]}"#;
        let SearchOutcome::Ready(results) = outcome(body) else {
            panic!("expected results");
        };
        assert_eq!(results[0].id, "x1");
        assert_eq!(results[0].address, "5 Oak Ave");
    }
}
