// crates/finder-core/src/model.rs

//! # Domain Model
//!
//! Plain data shared by every layer: where the user is, what was asked,
//! and what came back.

use crate::error::{FinderError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Search radius used until the user edits it, in meters.
pub const DEFAULT_RADIUS_METERS: i64 = 1500;

/// Place category sent with every nearby search.
pub const PLACE_CATEGORY: &str = "restaurant";

// -----------------------------------------------------------------------------
// COORDINATE
// -----------------------------------------------------------------------------

/// A latitude/longitude pair in degrees.
///
/// Field names follow the Places wire format (`geometry.location`), so the
/// same type deserializes straight out of a search response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Parses `"lat,lng"` (whitespace around either number is ignored).
    ///
    /// # Errors
    ///
    /// [`FinderError::InvalidCoordinate`] if either part is missing, not a
    /// number, or out of range (|lat| ≤ 90, |lng| ≤ 180).
    ///
    /// # Example
    ///
    /// ```rust
    /// use finder_core::Coordinate;
    ///
    /// let c = Coordinate::parse("37.0, -122.0").unwrap();
    /// assert_eq!(c, Coordinate::new(37.0, -122.0));
    /// assert!(Coordinate::parse("91,0").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| FinderError::InvalidCoordinate(format!("expected 'lat,lng', got '{s}'")))?;

        let lat: f64 = lat
            .trim()
            .parse()
            .map_err(|_| FinderError::InvalidCoordinate(format!("bad latitude '{}'", lat.trim())))?;
        let lng: f64 = lng
            .trim()
            .parse()
            .map_err(|_| FinderError::InvalidCoordinate(format!("bad longitude '{}'", lng.trim())))?;

        if !(-90.0..=90.0).contains(&lat) {
            return Err(FinderError::InvalidCoordinate(format!(
                "latitude {lat} outside [-90, 90]"
            )));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(FinderError::InvalidCoordinate(format!(
                "longitude {lng} outside [-180, 180]"
            )));
        }

        Ok(Self { lat, lng })
    }
}

impl FromStr for Coordinate {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

// -----------------------------------------------------------------------------
// QUERY & RESULTS
// -----------------------------------------------------------------------------

/// One nearby search: a center and a radius in meters.
///
/// The radius is whatever the user typed. Zero and negative values are not
/// rejected here; the remote service answers them with a failure status.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub center: Coordinate,
    pub radius: i64,
}

impl SearchQuery {
    pub const fn new(center: Coordinate, radius: i64) -> Self {
        Self { center, radius }
    }

    pub fn category(&self) -> &'static str {
        PLACE_CATEGORY
    }
}

/// A single place returned by a nearby search.
///
/// Identity is `id`. Accepts both the web-service (`place_id`) and JS API
/// (`id`) spellings, and `formatted_address` when `vicinity` is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PlaceRecordRaw")]
pub struct PlaceResult {
    pub id: String,
    pub display_name: String,
    pub address: String,
    pub location: Coordinate,
}

impl PlaceResult {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        address: impl Into<String>,
        location: Coordinate,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            address: address.into(),
            location,
        }
    }
}

/// Raw place record as it comes from JSON.
#[derive(Debug, Deserialize)]
struct PlaceRecordRaw {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    place_id: Option<String>,
    #[serde(default, alias = "display_name")]
    name: Option<String>,
    #[serde(default, alias = "address")]
    vicinity: Option<String>,
    #[serde(default)]
    formatted_address: Option<String>,
    #[serde(default)]
    geometry: Option<GeometryRaw>,
    #[serde(default)]
    location: Option<Coordinate>,
}

#[derive(Debug, Deserialize)]
struct GeometryRaw {
    location: Coordinate,
}

impl TryFrom<PlaceRecordRaw> for PlaceResult {
    type Error = String;

    fn try_from(raw: PlaceRecordRaw) -> std::result::Result<Self, Self::Error> {
        let id = raw
            .place_id
            .or(raw.id)
            .ok_or_else(|| "place record without an id".to_string())?;
        let location = raw
            .geometry
            .map(|g| g.location)
            .or(raw.location)
            .ok_or_else(|| format!("place record {id} without a location"))?;

        Ok(PlaceResult {
            id,
            display_name: raw.name.unwrap_or_default(),
            address: raw.vicinity.or(raw.formatted_address).unwrap_or_default(),
            location,
        })
    }
}

// -----------------------------------------------------------------------------
// LIFECYCLE
// -----------------------------------------------------------------------------

/// Where the current search stands. Exactly one holds at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", content = "data")]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Ready(Vec<PlaceResult>),
    Empty,
    Failed(String),
}

impl Status {
    /// Results to display. Only `Ready` carries any.
    pub fn results(&self) -> &[PlaceResult] {
        match self {
            Status::Ready(results) => results,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Status::Loading)
    }
}

/// The terminal value of one search call.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Valid search with at least one match, in remote order.
    Ready(Vec<PlaceResult>),
    /// Valid search, zero matches.
    Empty,
    /// The search mechanism itself failed; carries the raw status or error text.
    Failed(String),
}
