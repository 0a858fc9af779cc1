// crates/finder-core/src/lib.rs

//! # finder-core
//!
//! Find restaurants near the device's current position.
//!
//! The crate glues three outside capabilities together:
//! - a **location provider** that reports the device's coordinates once,
//! - a **places search** service answering "nearby search" queries,
//! - a **view** that renders the result as a map plus a list of cards.
//!
//! All mutable state lives in a single [`Controller`]. Front ends feed it
//! [`Action`]s, run the [`SearchTicket`]s it hands back, and render
//! [`view::render`] whenever a subscriber is notified.
//!
//! ```rust
//! use finder_core::prelude::*;
//!
//! let mut controller = Controller::new(DEFAULT_RADIUS_METERS);
//! controller.dispatch(Action::CapabilityReady);
//! let ticket = controller
//!     .dispatch(Action::LocationAcquired(Coordinate::new(37.0, -122.0)))
//!     .expect("location + capability triggers a search");
//! assert_eq!(ticket.query.radius, 1500);
//!
//! controller.dispatch(Action::SearchCompleted {
//!     generation: ticket.generation,
//!     outcome: SearchOutcome::Empty,
//! });
//! assert_eq!(controller.state().status, Status::Empty);
//! ```

pub mod config;
pub mod error;
#[cfg(feature = "http")]
pub mod http;
pub mod location;
pub mod model;
pub mod places;
pub mod session;
pub mod state;
pub mod view;

// Re-exports
pub use crate::config::FinderConfig;
pub use crate::error::{FinderError, Result};
pub use crate::location::{FixedLocation, LocationError, LocationProvider, TextLocation};
pub use crate::model::{
    Coordinate, PlaceResult, SearchOutcome, SearchQuery, Status, DEFAULT_RADIUS_METERS,
    PLACE_CATEGORY,
};
pub use crate::places::{NearbySearchResponse, PlacesSearch};
pub use crate::session::Session;
pub use crate::state::{Action, AppState, Capability, Controller, SearchTicket};
pub use crate::view::{render, Screen};

#[cfg(feature = "http")]
pub use crate::places::GooglePlacesClient;

pub mod prelude {
    //! Everything a front end needs in one import.
    pub use crate::config::FinderConfig;
    pub use crate::error::{FinderError, Result};
    pub use crate::location::{FixedLocation, LocationError, LocationProvider, TextLocation};
    pub use crate::model::{
        Coordinate, PlaceResult, SearchOutcome, SearchQuery, Status, DEFAULT_RADIUS_METERS,
    };
    pub use crate::places::{NearbySearchResponse, PlacesSearch};
    pub use crate::session::Session;
    pub use crate::state::{Action, AppState, Capability, Controller, SearchTicket};
    pub use crate::view::{render, Banner, Card, MapView, Marker, MarkerKind, Page, Screen};

    #[cfg(feature = "http")]
    pub use crate::http::{HttpClient, ReqwestClient};
    #[cfg(feature = "http")]
    pub use crate::places::GooglePlacesClient;
}
