// crates/finder-core/src/session.rs

//! # Session
//!
//! The event loop for native front ends: owns a [`Controller`] and a
//! [`PlacesSearch`] client, runs every ticket the controller hands out and
//! reports the outcome back.
//!
//! ```rust
//! use finder_core::prelude::*;
//!
//! struct Nothing;
//! impl PlacesSearch for Nothing {
//!     fn search(&self, _: &SearchQuery) -> SearchOutcome {
//!         SearchOutcome::Empty
//!     }
//! }
//!
//! let mut session = Session::new(Controller::default(), Nothing);
//! session.start(&FixedLocation::at(Coordinate::new(37.0, -122.0)));
//! assert_eq!(session.state().status, Status::Empty);
//! ```

use crate::error::FinderError;
use crate::location::LocationProvider;
use crate::places::PlacesSearch;
use crate::state::{Action, AppState, Controller, SearchTicket};
use crate::view::{render, Screen};

pub struct Session<P: PlacesSearch> {
    controller: Controller,
    places: Option<P>,
}

impl<P: PlacesSearch> Session<P> {
    pub fn new(controller: Controller, places: P) -> Self {
        Self {
            controller,
            places: Some(places),
        }
    }

    /// A session whose search capability never came up.
    ///
    /// The controller is told immediately, so the view shows the fatal
    /// screen instead of the page.
    pub fn failed(mut controller: Controller, error: &FinderError) -> Self {
        controller.dispatch(Action::CapabilityFailed(error.to_string()));
        Self {
            controller,
            places: None,
        }
    }

    /// Startup sequence: capability ready, then a one-shot location request.
    /// With a location, the first search runs before this returns.
    pub fn start(&mut self, provider: &dyn LocationProvider) {
        if self.places.is_none() {
            return;
        }
        self.dispatch(Action::CapabilityReady);

        let action = match provider.acquire_location() {
            Ok(coordinate) => Action::LocationAcquired(coordinate),
            Err(err) => Action::LocationFailed(err),
        };
        self.dispatch(action);
    }

    /// Applies `action` and runs any search it triggers to completion.
    pub fn dispatch(&mut self, action: Action) {
        if let Some(ticket) = self.controller.dispatch(action) {
            self.run(ticket);
        }
    }

    fn run(&mut self, ticket: SearchTicket) {
        let Some(places) = &self.places else {
            return;
        };
        let outcome = places.search(&ticket.query);
        self.controller.dispatch(Action::SearchCompleted {
            generation: ticket.generation,
            outcome,
        });
    }

    pub fn state(&self) -> &AppState {
        self.controller.state()
    }

    pub fn controller_mut(&mut self) -> &mut Controller {
        &mut self.controller
    }

    pub fn screen(&self) -> Screen {
        render(self.controller.state())
    }
}
