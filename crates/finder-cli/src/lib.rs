//! finder-cli
//! ==========
//!
//! Command-line interface for finding restaurants near a location with
//! `finder-core`.
//!
//! This crate primarily provides a binary (`finder`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! export GOOGLE_MAPS_API_KEY=...
//! finder --location 37.7749,-122.4194 search
//! finder --location 37.7749,-122.4194 --radius 800 interactive
//! ```
//!
//! For programmatic access to the controller and view model, use the
//! [`finder-core`] crate directly.
//!
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable. The presence of this file enables a rendered page on docs.rs.
