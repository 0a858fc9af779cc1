//! restaurant-finder
//! =================
//!
//! Umbrella crate for the workspace. It re-exports [`finder_core`] so the
//! programs in `demos/` can be run with `cargo run --example <name>`.
//!
//! - `finder-core` — controller, places client, view model
//! - `finder-cli` — the `finder` terminal front end
//! - `finder-wasm` — browser bindings

pub use finder_core::*;
