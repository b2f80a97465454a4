//! Content retrieval and display filtering.
//!
//! `ContentProvider` is the one entry point pages use: it serves typed
//! collections, caching each under its own key for the freshness window.
//! `filters` holds the pure functions that turn a raw collection into the
//! ordered subset a listing page renders.

pub mod catalog;
pub mod filters;
pub mod provider;

pub use provider::ContentProvider;
