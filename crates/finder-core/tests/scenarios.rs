use finder_core::prelude::*;
use finder_core::state::EMPTY_ADVISORY;
use std::cell::RefCell;

const HERE: Coordinate = Coordinate::new(37.0, -122.0);

/// Answers every search with the same response body and records the queries.
struct CannedSearch {
    body: String,
    queries: RefCell<Vec<SearchQuery>>,
}

impl CannedSearch {
    fn new(body: &str) -> Self {
        Self {
            body: body.to_string(),
            queries: RefCell::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.queries.borrow().len()
    }
}

impl PlacesSearch for CannedSearch {
    fn search(&self, query: &SearchQuery) -> SearchOutcome {
        self.queries.borrow_mut().push(*query);
        NearbySearchResponse::outcome_from_slice(self.body.as_bytes())
    }
}

const TWO_RESULTS: &str = r#"{
  "status": "OK",
  "results": [
    {"place_id": "p1", "name": "Pasta Place", "vicinity": "10 First St",
     "geometry": {"location": {"lat": 37.001, "lng": -122.001}}},
    {"place_id": "p2", "name": "Noodle Bar", "vicinity": "20 Second St",
     "geometry": {"location": {"lat": 37.002, "lng": -122.002}}}
  ]
}"#;

fn page(session: &Session<&CannedSearch>) -> Page {
    match session.screen() {
        Screen::Page(page) => page,
        other => panic!("expected the main page, got {other:?}"),
    }
}

fn started(places: &CannedSearch) -> Session<&CannedSearch> {
    let mut session = Session::new(Controller::new(DEFAULT_RADIUS_METERS), places);
    session.start(&FixedLocation::at(HERE));
    session
}

#[test]
fn ok_with_two_records_renders_two_cards_and_three_markers() {
    let places = CannedSearch::new(TWO_RESULTS);
    let session = started(&places);

    assert_eq!(places.queries.borrow()[0], SearchQuery::new(HERE, 1500));

    let page = page(&session);
    assert!(page.banner.is_none());
    let names: Vec<_> = page.cards.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Pasta Place", "Noodle Bar"]);

    let markers = page.map.markers();
    assert_eq!(markers.len(), 3);
    assert_eq!(markers[0].kind, MarkerKind::User);
    assert_eq!(markers[0].position, HERE);
    assert!(matches!(&markers[1].kind, MarkerKind::Place { id, .. } if id == "p1"));
    assert!(matches!(&markers[2].kind, MarkerKind::Place { id, .. } if id == "p2"));
}

#[test]
fn zero_results_renders_only_the_user_marker_and_an_advisory() {
    let places = CannedSearch::new(r#"{"status":"ZERO_RESULTS","results":[]}"#);
    let session = started(&places);

    assert_eq!(session.state().status, Status::Empty);
    let page = page(&session);
    assert!(page.cards.is_empty());
    assert_eq!(page.map.markers().len(), 1);
    assert_eq!(page.banner.map(|b| b.message).as_deref(), Some(EMPTY_ADVISORY));
}

#[test]
fn failure_status_is_shown_verbatim() {
    let places = CannedSearch::new(r#"{"status":"OVER_QUERY_LIMIT","results":[]}"#);
    let session = started(&places);

    let page = page(&session);
    assert!(page.cards.is_empty());
    let banner = page.banner.expect("advisory banner");
    assert!(banner.message.contains("OVER_QUERY_LIMIT"));
}

#[test]
fn radius_edits_search_once_per_distinct_value() {
    let places = CannedSearch::new(TWO_RESULTS);
    let mut session = started(&places);
    assert_eq!(places.calls(), 1);

    session.dispatch(Action::RadiusChanged(2500));
    session.dispatch(Action::RadiusChanged(2500));
    session.dispatch(Action::RadiusChanged(1500));
    assert_eq!(places.calls(), 3);
    assert_eq!(places.queries.borrow()[1].radius, 2500);

    // The button always searches again, even with an unchanged radius.
    session.dispatch(Action::SearchRequested);
    assert_eq!(places.calls(), 4);
}

#[test]
fn location_failure_never_searches_and_keeps_the_placeholder() {
    let places = CannedSearch::new(TWO_RESULTS);
    let mut session = Session::new(Controller::default(), &places);
    session.start(&FixedLocation::unsupported());

    session.dispatch(Action::RadiusChanged(4000));
    session.dispatch(Action::SearchRequested);
    assert_eq!(places.calls(), 0);

    let page = page(&session);
    assert!(matches!(page.map, MapView::Placeholder { .. }));
    assert!(page.banner.is_some());
}

#[test]
fn missing_key_yields_the_fatal_screen() {
    let places = CannedSearch::new(TWO_RESULTS);
    let err = FinderConfig::from_lookup(|_| None).unwrap_err();
    let mut session = Session::<&CannedSearch>::failed(Controller::default(), &err);
    session.start(&FixedLocation::at(HERE));

    assert!(matches!(session.screen(), Screen::Fatal { .. }));
    assert_eq!(places.calls(), 0);
}
