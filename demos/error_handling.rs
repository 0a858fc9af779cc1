//! Error handling example for restaurant-finder
//!
//! Shows how each failure class surfaces: a fatal screen when the search
//! capability cannot start, advisory banners for everything else.

use finder_core::prelude::*;

struct RemoteStatus(&'static str);

impl PlacesSearch for RemoteStatus {
    fn search(&self, _query: &SearchQuery) -> SearchOutcome {
        let body = format!(r#"{{"status":"{}","results":[]}}"#, self.0);
        NearbySearchResponse::outcome_from_slice(body.as_bytes())
    }
}

const HERE: Coordinate = Coordinate::new(37.0, -122.0);

fn main() -> Result<()> {
    println!("=== Restaurant Finder Error Handling Example ===\n");

    // Example 1: Missing API key -> blocking error screen
    println!("--- Example 1: No API key ---");
    match FinderConfig::from_lookup(|_| None) {
        Ok(_) => println!("✓ Key found"),
        Err(e) => {
            eprintln!("✗ Failed to configure: {e}");
            let session = Session::<RemoteStatus>::failed(Controller::default(), &e);
            print!("{}", session.screen());
        }
    }
    println!();

    // Example 2: No location capability -> advisory, no search, map placeholder
    println!("--- Example 2: Location unavailable ---");
    let mut session = Session::new(Controller::default(), RemoteStatus("OK"));
    session.start(&FixedLocation::unsupported());
    print!("{}", session.screen());
    println!();

    // Example 3: Zero results and remote failures -> advisory banner
    for status in ["ZERO_RESULTS", "OVER_QUERY_LIMIT", "REQUEST_DENIED"] {
        println!("--- Example 3: Remote answers {status} ---");
        let mut session = Session::new(Controller::default(), RemoteStatus(status));
        session.start(&FixedLocation::at(HERE));
        print!("{}", session.screen());
        println!();
    }

    // Example 4: Bad coordinate text
    println!("--- Example 4: Parsing a location ---");
    for text in ["37.0,-122.0", "91,0", "somewhere"] {
        match Coordinate::parse(text) {
            Ok(c) => println!("  {text:>12} -> {c}"),
            Err(e) => println!("  {text:>12} -> {e}"),
        }
    }

    Ok(())
}
