//! Basic usage example for restaurant-finder
//!
//! Drives the controller by hand with a canned search service, the way a
//! front end would: capability, location, search, radius edits, selection.

use finder_core::prelude::*;

/// Pretends to be the places service.
struct Canned;

impl PlacesSearch for Canned {
    fn search(&self, query: &SearchQuery) -> SearchOutcome {
        if query.radius < 1000 {
            return SearchOutcome::Empty;
        }
        SearchOutcome::Ready(vec![
            PlaceResult::new(
                "demo-1",
                "Golden Gate Grill",
                "100 Bay St",
                Coordinate::new(37.7751, -122.4180),
            ),
            PlaceResult::new(
                "demo-2",
                "Mission Tacos",
                "22 Valencia St",
                Coordinate::new(37.7702, -122.4221),
            ),
        ])
    }
}

fn main() {
    println!("=== Restaurant Finder Basic Usage ===\n");

    let mut session = Session::new(Controller::new(DEFAULT_RADIUS_METERS), Canned);

    // Example 1: Startup (capability ready, location acquired, first search)
    println!("--- Example 1: Startup ---");
    session.start(&FixedLocation::at(Coordinate::new(37.7749, -122.4194)));
    print!("{}", session.screen());
    println!();

    // Example 2: Shrinking the radius until nothing is found
    println!("--- Example 2: Radius 500 m ---");
    session.dispatch(Action::RadiusChanged(500));
    print!("{}", session.screen());
    println!();

    // Example 3: Back to a wider radius, then click a marker
    println!("--- Example 3: Radius 2000 m and a selection ---");
    session.dispatch(Action::RadiusChanged(2000));
    session.dispatch(Action::ResultSelected(Some("demo-2".into())));
    print!("{}", session.screen());

    if let Some(place) = &session.state().selected {
        println!("\nSelected: {} ({})", place.display_name, place.address);
    }
}
