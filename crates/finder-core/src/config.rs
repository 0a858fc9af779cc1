// crates/finder-core/src/config.rs

//! # Configuration
//!
//! The only required setting is the places API key. Everything else has a
//! default.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `GOOGLE_MAPS_API_KEY` (or `VITE_GOOGLE_MAPS_API_KEY`) | API key | — (required) |
//! | `FINDER_PLACES_ENDPOINT` | Nearby search URL | [`DEFAULT_ENDPOINT`] |
//! | `FINDER_TIMEOUT_SECS` | HTTP timeout | 15 |
//! | `FINDER_RADIUS` | Initial radius in meters | 1500 |

use crate::error::{FinderError, Result};
use crate::model::DEFAULT_RADIUS_METERS;

pub const API_KEY_VAR: &str = "GOOGLE_MAPS_API_KEY";
pub const API_KEY_FALLBACK_VAR: &str = "VITE_GOOGLE_MAPS_API_KEY";
pub const ENDPOINT_VAR: &str = "FINDER_PLACES_ENDPOINT";
pub const TIMEOUT_VAR: &str = "FINDER_TIMEOUT_SECS";
pub const RADIUS_VAR: &str = "FINDER_RADIUS";

pub const DEFAULT_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/place/nearbysearch/json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone, PartialEq)]
pub struct FinderConfig {
    pub api_key: String,
    pub endpoint: String,
    pub timeout_secs: u64,
    pub default_radius: i64,
}

impl FinderConfig {
    /// A config with defaults for everything but the key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            default_radius: DEFAULT_RADIUS_METERS,
        }
    }

    /// Reads the process environment.
    ///
    /// # Errors
    ///
    /// [`FinderError::MissingApiKey`] if neither key variable holds a
    /// non-blank value.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`Self::from_env`] but reads through `lookup`, so callers
    /// (and tests) can layer their own sources over the environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = non_blank(API_KEY_VAR)
            .or_else(|| non_blank(API_KEY_FALLBACK_VAR))
            .ok_or(FinderError::MissingApiKey(API_KEY_VAR))?;

        let mut config = Self::new(api_key.trim());
        if let Some(endpoint) = non_blank(ENDPOINT_VAR) {
            config.endpoint = endpoint;
        }
        if let Some(timeout) = non_blank(TIMEOUT_VAR).and_then(|v| v.trim().parse().ok()) {
            config.timeout_secs = timeout;
        }
        if let Some(radius) = non_blank(RADIUS_VAR).and_then(|v| v.trim().parse().ok()) {
            config.default_radius = radius;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn missing_key_is_an_error() {
        let err = FinderConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, FinderError::MissingApiKey(API_KEY_VAR)));

        let blank = FinderConfig::from_lookup(lookup(&[(API_KEY_VAR, "   ")]));
        assert!(blank.is_err());
    }

    #[test]
    fn fallback_key_variable_is_honoured() {
        let cfg = FinderConfig::from_lookup(lookup(&[(API_KEY_FALLBACK_VAR, "abc")])).unwrap();
        assert_eq!(cfg.api_key, "abc");
        assert_eq!(cfg.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(cfg.default_radius, 1500);
    }

    #[test]
    fn overrides_apply() {
        let cfg = FinderConfig::from_lookup(lookup(&[
            (API_KEY_VAR, "k"),
            (ENDPOINT_VAR, "http://localhost:9000/nearby"),
            (TIMEOUT_VAR, "3"),
            (RADIUS_VAR, "800"),
        ]))
        .unwrap();
        assert_eq!(cfg.endpoint, "http://localhost:9000/nearby");
        assert_eq!(cfg.timeout_secs, 3);
        assert_eq!(cfg.default_radius, 800);
    }
}
