//! finder-wasm — WebAssembly bindings for finder-core
//!
//! This crate runs the restaurant finder's state controller in the browser.
//! Rust owns the state and the view model; JavaScript owns the two things
//! only the page can do: load the Maps JS API and run `nearbySearch`.
//!
//! What it provides
//! ----------------
//! - Automatic panic hook on module load (via `#[wasm_bindgen(start)]`)
//! - `FinderApp`: the single state owner, with
//!   - `acquire_location()` — one-shot `navigator.geolocation` request
//!   - `capability_ready()` / `capability_failed(msg)` — Maps JS API loader result
//!   - `set_radius(m)`, `search()`, `select(id)` — user input
//!   - `on_search(fn)` — called with `{generation, query}` for every search to run
//!   - `complete_search(generation, json)` — the `{status, results}` answer
//!   - `subscribe(fn)` / `view()` — the rendered page as a plain object
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { FinderApp } from 'finder-wasm';
//!
//! async function main() {
//!   await init();
//!   const app = new FinderApp(import.meta.env.VITE_GOOGLE_MAPS_API_KEY ?? '');
//!   app.subscribe((view) => draw(view));
//!   app.on_search(({ generation, query }) => {
//!     const service = new google.maps.places.PlacesService(document.createElement('div'));
//!     service.nearbySearch(
//!       { location: query.center, radius: query.radius, type: 'restaurant' },
//!       (results, status) => app.complete_search(generation, JSON.stringify({
//!         status,
//!         results: (results ?? []).map((r) => ({
//!           place_id: r.place_id, name: r.name, vicinity: r.vicinity,
//!           location: r.geometry.location.toJSON(),
//!         })),
//!       })),
//!     );
//!   });
//!   loadMapsApi().then(() => app.capability_ready(), (e) => app.capability_failed(e.message));
//!   app.acquire_location();
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - Responses from superseded searches are ignored; only the latest
//!   generation is applied.
//! - `view()` returns `{screen: "loading" | "fatal" | "page", ...}`; use
//!   `view_json()` for a string.
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;

// Core Imports
use finder_core::{
    render, Action, AppState, Controller, Coordinate, FinderError, LocationError,
    NearbySearchResponse, SearchTicket, DEFAULT_RADIUS_METERS,
};
use serde_wasm_bindgen::to_value;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing restaurant finder WASM module...".into());
}

/* --------------------------------------------------------------------------
   Shared Handle
-------------------------------------------------------------------------- */

struct Inner {
    controller: Controller,
    listeners: Vec<js_sys::Function>,
    search_handler: Option<js_sys::Function>,
    /// Latest search issued before a handler was registered.
    pending: Option<SearchTicket>,
}

/// Cheap clone shared with the geolocation callbacks.
#[derive(Clone)]
struct Handle {
    inner: Rc<RefCell<Inner>>,
    dirty: Rc<Cell<bool>>,
}

impl Handle {
    fn new(radius: i64) -> Self {
        let dirty = Rc::new(Cell::new(false));
        let mut controller = Controller::new(radius);
        let flag = Rc::clone(&dirty);
        controller.subscribe(move |_| flag.set(true));

        Self {
            inner: Rc::new(RefCell::new(Inner {
                controller,
                listeners: Vec::new(),
                search_handler: None,
                pending: None,
            })),
            dirty,
        }
    }

    /// Dispatches `action`, then (with the state no longer borrowed) tells
    /// the JS listeners and hands any new search to the JS handler, so both
    /// may call straight back into the app.
    fn apply(&self, action: Action) -> Option<u32> {
        let (ticket, listeners, handler, view) = {
            let mut inner = self.inner.borrow_mut();
            let ticket = inner.controller.dispatch(action);
            if let Some(ticket) = ticket {
                if inner.search_handler.is_none() {
                    inner.pending = Some(ticket);
                }
            }
            let view = self
                .dirty
                .replace(false)
                .then(|| render(inner.controller.state()));
            (
                ticket,
                inner.listeners.clone(),
                inner.search_handler.clone(),
                view,
            )
        };

        if let Some(view) = view {
            if !listeners.is_empty() {
                let value = to_js(&view);
                for listener in &listeners {
                    if let Err(e) = listener.call1(&JsValue::NULL, &value) {
                        web_sys::console::error_2(&"view listener failed".into(), &e);
                    }
                }
            }
        }

        let ticket = ticket?;
        if let Some(handler) = handler {
            run_search(&handler, &ticket);
        }
        Some(ticket.generation)
    }

    /// Installs the search handler and hands it the search that was waiting
    /// for one, unless a later search already replaced it.
    fn set_search_handler(&self, handler: js_sys::Function) {
        let pending = {
            let mut inner = self.inner.borrow_mut();
            inner.search_handler = Some(handler.clone());
            let latest = inner.controller.generation();
            inner.pending.take().filter(|t| t.generation == latest)
        };
        if let Some(ticket) = pending {
            run_search(&handler, &ticket);
        }
    }

    fn state<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(self.inner.borrow().controller.state())
    }
}

fn run_search(handler: &js_sys::Function, ticket: &SearchTicket) {
    if let Err(e) = handler.call1(&JsValue::NULL, &to_js(ticket)) {
        web_sys::console::error_2(&"search handler failed".into(), &e);
    }
}

fn to_js<T: serde::Serialize>(value: &T) -> JsValue {
    to_value(value).unwrap_or(JsValue::NULL)
}

/* --------------------------------------------------------------------------
   FinderApp
-------------------------------------------------------------------------- */

/// The restaurant finder page state.
#[wasm_bindgen]
pub struct FinderApp {
    handle: Handle,
}

#[wasm_bindgen]
impl FinderApp {
    /// Creates the app with the default 1500 m radius.
    ///
    /// A blank `api_key` means the Maps capability can never load: the app
    /// goes straight to the fatal screen.
    #[wasm_bindgen(constructor)]
    pub fn new(api_key: &str) -> FinderApp {
        let app = FinderApp {
            handle: Handle::new(DEFAULT_RADIUS_METERS),
        };
        if api_key.trim().is_empty() {
            let err = FinderError::MissingApiKey(finder_core::config::API_KEY_FALLBACK_VAR);
            app.handle.apply(Action::CapabilityFailed(err.to_string()));
        }
        app
    }

    /* ---------------------------- capability ---------------------------- */

    /// The Maps JS API finished loading.
    pub fn capability_ready(&self) -> Option<u32> {
        self.handle.apply(Action::CapabilityReady)
    }

    /// The Maps JS API failed to load.
    pub fn capability_failed(&self, message: &str) {
        self.handle
            .apply(Action::CapabilityFailed(message.to_string()));
    }

    /* ----------------------------- location ----------------------------- */

    /// Asks `navigator.geolocation` for the current position, once.
    pub fn acquire_location(&self) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        self.acquire_location_from(&window.navigator())
    }

    /// Reports a position obtained elsewhere.
    pub fn location_acquired(&self, lat: f64, lng: f64) -> Option<u32> {
        self.handle
            .apply(Action::LocationAcquired(Coordinate::new(lat, lng)))
    }

    /// Reports a failed location request obtained elsewhere.
    pub fn location_failed(&self, unsupported: bool, reason: Option<String>) {
        let err = if unsupported {
            LocationError::Unsupported
        } else {
            LocationError::Failed(reason.unwrap_or_default())
        };
        self.handle.apply(Action::LocationFailed(err));
    }

    /* ---------------------------- user input ---------------------------- */

    /// Radius edit from the number input. Fractions are truncated; nothing
    /// else is checked.
    pub fn set_radius(&self, meters: f64) -> Option<u32> {
        self.handle.apply(Action::RadiusChanged(meters as i64))
    }

    /// The "Search" button.
    pub fn search(&self) -> Option<u32> {
        self.handle.apply(Action::SearchRequested)
    }

    /// Marker click; `None` clears the selection.
    pub fn select(&self, id: Option<String>) {
        self.handle.apply(Action::ResultSelected(id));
    }

    /* ------------------------------ search ------------------------------ */

    /// Registers the function that runs searches. Called with
    /// `{generation, query: {center: {lat, lng}, radius}}`.
    /// A search started before this call is handed over right away.
    pub fn on_search(&self, handler: js_sys::Function) {
        self.handle.set_search_handler(handler);
    }

    /// Delivers the answer to search `generation` as `{status, results}` JSON.
    pub fn complete_search(&self, generation: u32, response_json: &str) {
        let outcome = NearbySearchResponse::outcome_from_slice(response_json.as_bytes());
        self.handle.apply(Action::SearchCompleted {
            generation,
            outcome,
        });
    }

    /* ------------------------------- view ------------------------------- */

    /// Registers a function called with the rendered view after every change.
    pub fn subscribe(&self, listener: js_sys::Function) {
        self.handle.inner.borrow_mut().listeners.push(listener);
    }

    pub fn view(&self) -> JsValue {
        to_js(&self.handle.state(render))
    }

    pub fn view_json(&self) -> String {
        serde_json::to_string(&self.handle.state(render)).unwrap_or_default()
    }

    pub fn radius(&self) -> f64 {
        self.handle.state(|s| s.radius as f64)
    }

    pub fn advisory(&self) -> Option<String> {
        self.handle.state(|s| s.advisory.clone())
    }

    pub fn selected_id(&self) -> Option<String> {
        self.handle
            .state(|s| s.selected.as_ref().map(|p| p.id.clone()))
    }

    pub fn result_count(&self) -> usize {
        self.handle.state(|s| s.status.results().len())
    }
}

impl FinderApp {
    /// Requests a position from `navigator`. A navigator without a usable
    /// geolocation service reports the platform as unsupported.
    pub fn acquire_location_from(&self, navigator: &web_sys::Navigator) -> Result<(), JsValue> {
        use wasm_bindgen::JsCast;

        let supported = js_sys::Reflect::has(navigator, &JsValue::from_str("geolocation"))
            .unwrap_or(false);
        let geolocation = match supported.then(|| navigator.geolocation()) {
            Some(Ok(geolocation)) => geolocation,
            Some(Err(e)) => {
                web_sys::console::warn_2(&"geolocation unavailable".into(), &e);
                self.handle
                    .apply(Action::LocationFailed(LocationError::Unsupported));
                return Ok(());
            }
            None => {
                self.handle
                    .apply(Action::LocationFailed(LocationError::Unsupported));
                return Ok(());
            }
        };

        let on_ok = {
            let handle = self.handle.clone();
            Closure::once_into_js(move |position: JsValue| {
                let action = match coordinate_of(&position) {
                    Some(coordinate) => Action::LocationAcquired(coordinate),
                    None => Action::LocationFailed(LocationError::Failed(
                        "position without coordinates".into(),
                    )),
                };
                handle.apply(action);
            })
        };
        let on_err = {
            let handle = self.handle.clone();
            Closure::once_into_js(move |error: JsValue| {
                let reason = js_sys::Reflect::get(&error, &"message".into())
                    .ok()
                    .and_then(|m| m.as_string())
                    .unwrap_or_default();
                handle.apply(Action::LocationFailed(LocationError::Failed(reason)));
            })
        };

        geolocation
            .get_current_position_with_error_callback(on_ok.unchecked_ref(), Some(on_err.unchecked_ref()))
    }
}

fn coordinate_of(position: &JsValue) -> Option<Coordinate> {
    let coords = js_sys::Reflect::get(position, &"coords".into()).ok()?;
    let lat = js_sys::Reflect::get(&coords, &"latitude".into()).ok()?.as_f64()?;
    let lng = js_sys::Reflect::get(&coords, &"longitude".into()).ok()?.as_f64()?;
    Some(Coordinate::new(lat, lng))
}
