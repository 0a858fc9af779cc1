// crates/finder-core/src/location.rs

//! # Location Provider
//!
//! One-shot acquisition of the device's coordinates. Requested once at
//! startup; there is no automatic retry.

use crate::model::Coordinate;
use std::fmt;

/// Why a location could not be acquired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    /// The platform has no location capability at all.
    Unsupported,
    /// The capability exists but the request did not succeed (denied,
    /// unavailable, timed out). Carries whatever reason the platform gave.
    Failed(String),
}

impl LocationError {
    /// Advisory text shown to the user.
    pub fn advisory(&self) -> &'static str {
        match self {
            LocationError::Unsupported => "Error: This platform doesn't support geolocation.",
            LocationError::Failed(_) => "Error: The Geolocation service failed.",
        }
    }
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationError::Unsupported => write!(f, "geolocation unsupported"),
            LocationError::Failed(reason) => write!(f, "geolocation failed: {reason}"),
        }
    }
}

impl std::error::Error for LocationError {}

/// Something that can tell us where the device is.
pub trait LocationProvider {
    fn acquire_location(&self) -> Result<Coordinate, LocationError>;
}

/// A provider backed by a configured coordinate.
///
/// On native front ends the "platform" is the command line or environment:
/// with no coordinate configured there is simply no location capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedLocation(pub Option<Coordinate>);

impl FixedLocation {
    pub const fn at(coordinate: Coordinate) -> Self {
        Self(Some(coordinate))
    }

    pub const fn unsupported() -> Self {
        Self(None)
    }
}

impl LocationProvider for FixedLocation {
    fn acquire_location(&self) -> Result<Coordinate, LocationError> {
        self.0.ok_or(LocationError::Unsupported)
    }
}

/// A provider that parses `"lat,lng"` text when asked.
///
/// An empty string means no capability; anything unparsable is a failed
/// request.
#[derive(Debug, Clone)]
pub struct TextLocation(pub String);

impl LocationProvider for TextLocation {
    fn acquire_location(&self) -> Result<Coordinate, LocationError> {
        let text = self.0.trim();
        if text.is_empty() {
            return Err(LocationError::Unsupported);
        }
        Coordinate::parse(text).map_err(|e| LocationError::Failed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_location_reports_its_coordinate() {
        let provider = FixedLocation::at(Coordinate::new(37.0, -122.0));
        assert_eq!(provider.acquire_location(), Ok(Coordinate::new(37.0, -122.0)));
    }

    #[test]
    fn missing_coordinate_is_unsupported() {
        assert_eq!(
            FixedLocation::unsupported().acquire_location(),
            Err(LocationError::Unsupported)
        );
        assert_eq!(
            TextLocation("  ".into()).acquire_location(),
            Err(LocationError::Unsupported)
        );
    }

    #[test]
    fn garbage_text_is_a_failed_request() {
        let err = TextLocation("north pole".into()).acquire_location().unwrap_err();
        assert!(matches!(err, LocationError::Failed(_)));
        assert_eq!(err.advisory(), "Error: The Geolocation service failed.");
    }
}
