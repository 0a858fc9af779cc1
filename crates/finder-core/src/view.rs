// crates/finder-core/src/view.rs

//! # View
//!
//! Pure rendering: [`render`] turns an [`AppState`] into a [`Screen`]
//! description. The browser front end serializes it for JS; the terminal
//! front end prints it through its `Display` impl.

use crate::model::Coordinate;
use crate::state::{AppState, Capability};
use serde::Serialize;
use std::fmt;

pub const TITLE: &str = "Restaurant Finder";
pub const FATAL_TITLE: &str = "Error Loading Google Maps";
pub const BANNER_TITLE: &str = "Notice";
pub const RADIUS_LABEL: &str = "Search Radius (meters)";
pub const SEARCH_LABEL: &str = "Search";
pub const LOADING_TEXT: &str = "Loading...";
pub const MAP_PLACEHOLDER_TEXT: &str = "Loading map...";
pub const MAP_ZOOM: u8 = 14;

/// What to show.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    /// Full-screen indicator while the map/search capability initializes.
    Loading,
    /// Blocking error screen; the capability failed to load.
    Fatal { title: String, message: String },
    Page(Page),
}

/// The main page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub title: String,
    pub banner: Option<Banner>,
    pub radius_input: RadiusInput,
    pub search_label: String,
    /// A search is in flight.
    pub searching: bool,
    pub map: MapView,
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Banner {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadiusInput {
    pub label: String,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MapView {
    /// No location yet (or never).
    Placeholder { text: String },
    Map {
        center: Coordinate,
        zoom: u8,
        markers: Vec<Marker>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub position: Coordinate,
    pub kind: MarkerKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MarkerKind {
    /// The user's own position. Never part of the results.
    User,
    /// A search result; clicking it selects `id`.
    Place { id: String },
}

/// One result card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub address: String,
}

/// Renders the current state.
pub fn render(state: &AppState) -> Screen {
    match &state.capability {
        Capability::Initializing => return Screen::Loading,
        Capability::Failed(message) => {
            return Screen::Fatal {
                title: FATAL_TITLE.to_string(),
                message: message.clone(),
            }
        }
        Capability::Ready => {}
    }

    let results = state.status.results();

    let map = match state.location {
        None => MapView::Placeholder {
            text: MAP_PLACEHOLDER_TEXT.to_string(),
        },
        Some(center) => {
            let mut markers = Vec::with_capacity(results.len() + 1);
            markers.push(Marker {
                position: center,
                kind: MarkerKind::User,
            });
            markers.extend(results.iter().map(|place| Marker {
                position: place.location,
                kind: MarkerKind::Place {
                    id: place.id.clone(),
                },
            }));
            MapView::Map {
                center,
                zoom: MAP_ZOOM,
                markers,
            }
        }
    };

    let cards = results
        .iter()
        .map(|place| Card {
            id: place.id.clone(),
            name: place.display_name.clone(),
            address: place.address.clone(),
        })
        .collect();

    Screen::Page(Page {
        title: TITLE.to_string(),
        banner: state.advisory.as_ref().map(|message| Banner {
            title: BANNER_TITLE.to_string(),
            message: message.clone(),
        }),
        radius_input: RadiusInput {
            label: RADIUS_LABEL.to_string(),
            value: state.radius,
        },
        search_label: SEARCH_LABEL.to_string(),
        searching: state.status.is_loading(),
        map,
        cards,
    })
}

impl MapView {
    pub fn markers(&self) -> &[Marker] {
        match self {
            MapView::Map { markers, .. } => markers,
            MapView::Placeholder { .. } => &[],
        }
    }
}

// -----------------------------------------------------------------------------
// TEXT RENDERING
// -----------------------------------------------------------------------------

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::Loading => writeln!(f, "{LOADING_TEXT}"),
            Screen::Fatal { title, message } => {
                writeln!(f, "!! {title}")?;
                writeln!(f, "   {message}")
            }
            Screen::Page(page) => write!(f, "{page}"),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.title)?;
        if let Some(banner) = &self.banner {
            writeln!(f, "[{}] {}", banner.title, banner.message)?;
        }
        writeln!(f, "{}: {}", self.radius_input.label, self.radius_input.value)?;

        match &self.map {
            MapView::Placeholder { text } => writeln!(f, "{text}")?,
            MapView::Map {
                center,
                zoom,
                markers,
            } => {
                writeln!(f, "Map @ {center} (zoom {zoom}), {} marker(s)", markers.len())?;
                for (i, marker) in markers.iter().enumerate() {
                    match &marker.kind {
                        MarkerKind::User => writeln!(f, "  * you are here ({})", marker.position)?,
                        MarkerKind::Place { id } => {
                            writeln!(f, "  {i}. {id} ({})", marker.position)?
                        }
                    }
                }
            }
        }

        if self.searching {
            writeln!(f, "Searching...")?;
        }
        for (i, card) in self.cards.iter().enumerate() {
            writeln!(f, "{:>3}. {} — {}", i + 1, card.name, card.address)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PlaceResult, Status};

    fn ready_state() -> AppState {
        let mut s = AppState::new(1500);
        s.capability = Capability::Ready;
        s
    }

    #[test]
    fn capability_gates_the_page() {
        let mut s = AppState::new(1500);
        assert_eq!(render(&s), Screen::Loading);

        s.capability = Capability::Failed("No Google Maps API key configured".into());
        match render(&s) {
            Screen::Fatal { title, message } => {
                assert_eq!(title, FATAL_TITLE);
                assert!(message.contains("API key"));
            }
            other => panic!("unexpected screen {other:?}"),
        }
    }

    #[test]
    fn no_location_shows_placeholder() {
        let Screen::Page(page) = render(&ready_state()) else {
            panic!("expected page");
        };
        assert_eq!(
            page.map,
            MapView::Placeholder {
                text: MAP_PLACEHOLDER_TEXT.into()
            }
        );
        assert!(page.map.markers().is_empty());
    }

    #[test]
    fn loading_status_marks_the_page_as_searching() {
        let mut s = ready_state();
        s.location = Some(Coordinate::new(0.0, 0.0));
        s.status = Status::Loading;
        let screen = render(&s);
        let Screen::Page(page) = &screen else {
            panic!("expected page");
        };
        assert!(page.searching);
        assert!(page.cards.is_empty());
        assert!(screen.to_string().contains("Searching..."));

        s.status = Status::Empty;
        let Screen::Page(page) = render(&s) else {
            panic!("expected page");
        };
        assert!(!page.searching);
    }

    #[test]
    fn markers_and_cards_ignore_the_selection() {
        let a = PlaceResult::new("a", "Alpha", "1 A St", Coordinate::new(1.0, 1.0));
        let b = PlaceResult::new("b", "Beta", "2 B St", Coordinate::new(2.0, 2.0));
        let mut s = ready_state();
        s.location = Some(Coordinate::new(0.0, 0.0));
        s.status = Status::Ready(vec![a, b.clone()]);
        s.selected = Some(b);

        let screen = render(&s);
        let Screen::Page(page) = &screen else {
            panic!("expected page");
        };
        assert_eq!(page.map.markers()[2].kind, MarkerKind::Place { id: "b".into() });

        // Selection is tracked in state only; the page is the same without it.
        let mut unselected = s.clone();
        unselected.selected = None;
        assert_eq!(screen, render(&unselected));

        let text = screen.to_string();
        assert!(text.contains("1. Alpha — 1 A St"));
        assert!(text.contains("2. Beta — 2 B St"));
    }
}
