// crates/finder-core/src/state.rs

//! # Application State Controller
//!
//! Single owner of all view state. Front ends never mutate [`AppState`]
//! directly: they [`Controller::dispatch`] an [`Action`], run the
//! [`SearchTicket`] that may come back, and re-render when a subscriber is
//! called.
//!
//! Search lifecycle:
//!
//! ```text
//!   Idle ──search──▶ Loading ──OK──────────▶ Ready(results)
//!                      ▲   ├──ZERO_RESULTS─▶ Empty   (advisory: increase radius)
//!                      │   └──other────────▶ Failed  (advisory: raw status)
//!                      └──── any new search supersedes whatever was there
//! ```
//!
//! Every issued search gets a generation number. A completion carrying an
//! older generation than the last one issued is dropped, so a slow response
//! can never overwrite a newer one.

use crate::location::LocationError;
use crate::model::{Coordinate, PlaceResult, SearchOutcome, SearchQuery, Status};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Advisory shown when a valid search matched nothing.
pub const EMPTY_ADVISORY: &str =
    "No restaurants found within the current search radius. Try increasing the radius.";

/// Advisory prefix for a failed search; the raw status follows.
pub const FAILED_ADVISORY_PREFIX: &str = "Error fetching restaurants: ";

/// Whether the map/search capability finished initializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(tag = "kind", content = "message")]
pub enum Capability {
    #[default]
    Initializing,
    Ready,
    /// Fatal. Nothing else is shown.
    Failed(String),
}

/// Everything the view needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppState {
    pub capability: Capability,
    pub location: Option<Coordinate>,
    pub radius: i64,
    pub status: Status,
    /// Last place the user clicked. Tracked, not otherwise consumed.
    pub selected: Option<PlaceResult>,
    /// Non-fatal message for the banner.
    pub advisory: Option<String>,
}

impl AppState {
    pub fn new(radius: i64) -> Self {
        Self {
            capability: Capability::Initializing,
            location: None,
            radius,
            status: Status::Idle,
            selected: None,
            advisory: None,
        }
    }

    /// The query a search would send right now, if a location is known.
    pub fn query(&self) -> Option<SearchQuery> {
        self.location.map(|center| SearchQuery::new(center, self.radius))
    }

    pub fn can_search(&self) -> bool {
        self.capability == Capability::Ready && self.location.is_some()
    }
}

/// Everything that can happen to the state.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The map/search capability loaded.
    CapabilityReady,
    /// The map/search capability could not load (e.g. no API key).
    CapabilityFailed(String),
    LocationAcquired(Coordinate),
    LocationFailed(LocationError),
    /// The user committed a radius (meters). Not validated.
    RadiusChanged(i64),
    /// The user pressed "Search".
    SearchRequested,
    SearchCompleted {
        generation: u32,
        outcome: SearchOutcome,
    },
    /// The user clicked a marker (`Some(id)`) or cleared the selection.
    ResultSelected(Option<String>),
}

/// A search the driver must run, then report back with
/// [`Action::SearchCompleted`] carrying the same generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchTicket {
    pub generation: u32,
    pub query: SearchQuery,
}

type Subscriber = Box<dyn FnMut(&AppState)>;

/// The store.
pub struct Controller {
    state: AppState,
    generation: u32,
    subscribers: Vec<Subscriber>,
}

impl Controller {
    pub fn new(radius: i64) -> Self {
        Self {
            state: AppState::new(radius),
            generation: 0,
            subscribers: Vec::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Generation of the most recently issued search (0 before the first).
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Registers `f` to be called after every action that changed the state.
    pub fn subscribe<F>(&mut self, f: F)
    where
        F: FnMut(&AppState) + 'static,
    {
        self.subscribers.push(Box::new(f));
    }

    /// Applies `action`. Returns the search to run, if the action started one.
    pub fn dispatch(&mut self, action: Action) -> Option<SearchTicket> {
        let before = self.state.clone();
        let ticket = self.reduce(action);

        if self.state != before {
            for subscriber in &mut self.subscribers {
                subscriber(&self.state);
            }
        }
        ticket
    }

    // -----------------------------------------------------------------------
    // REDUCER
    // -----------------------------------------------------------------------

    fn reduce(&mut self, action: Action) -> Option<SearchTicket> {
        match action {
            Action::CapabilityReady => {
                // A failed capability stays failed.
                if self.state.capability != Capability::Initializing {
                    return None;
                }
                self.state.capability = Capability::Ready;
                self.begin_search()
            }
            Action::CapabilityFailed(message) => {
                warn!(error = %message, "Map capability failed to initialize");
                self.state.capability = Capability::Failed(message);
                None
            }
            Action::LocationAcquired(coordinate) => {
                info!(location = %coordinate, "Location acquired");
                self.state.location = Some(coordinate);
                self.begin_search()
            }
            Action::LocationFailed(err) => {
                warn!(error = %err, "Location unavailable");
                self.state.advisory = Some(err.advisory().to_string());
                None
            }
            Action::RadiusChanged(radius) => {
                if radius == self.state.radius {
                    return None;
                }
                self.state.radius = radius;
                self.begin_search()
            }
            Action::SearchRequested => self.begin_search(),
            Action::SearchCompleted {
                generation,
                outcome,
            } => {
                self.complete_search(generation, outcome);
                None
            }
            Action::ResultSelected(id) => {
                self.select(id);
                None
            }
        }
    }

    fn begin_search(&mut self) -> Option<SearchTicket> {
        if !self.state.can_search() {
            debug!(
                capability = ?self.state.capability,
                has_location = self.state.location.is_some(),
                "Search not possible yet"
            );
            return None;
        }
        let query = self.state.query()?;

        self.generation = self.generation.wrapping_add(1);
        self.state.status = Status::Loading;

        info!(
            generation = self.generation,
            location = %query.center,
            radius = query.radius,
            "Searching for restaurants"
        );
        Some(SearchTicket {
            generation: self.generation,
            query,
        })
    }

    fn complete_search(&mut self, generation: u32, outcome: SearchOutcome) {
        if generation != self.generation {
            debug!(
                generation,
                latest = self.generation,
                "Discarding stale search response"
            );
            return;
        }

        match outcome {
            SearchOutcome::Ready(results) => {
                info!(generation, count = results.len(), "Search complete");
                self.state.status = Status::Ready(results);
                self.state.advisory = None;
            }
            SearchOutcome::Empty => {
                info!(generation, "Search returned no results");
                self.state.status = Status::Empty;
                self.state.advisory = Some(EMPTY_ADVISORY.to_string());
            }
            SearchOutcome::Failed(status) => {
                warn!(generation, status = %status, "Search failed");
                self.state.advisory = Some(format!("{FAILED_ADVISORY_PREFIX}{status}"));
                self.state.status = Status::Failed(status);
            }
        }
    }

    fn select(&mut self, id: Option<String>) {
        let Some(id) = id else {
            self.state.selected = None;
            return;
        };
        match self.state.status.results().iter().find(|r| r.id == id) {
            Some(place) => self.state.selected = Some(place.clone()),
            None => debug!(id = %id, "Ignoring selection of unknown place"),
        }
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(crate::model::DEFAULT_RADIUS_METERS)
    }
}
