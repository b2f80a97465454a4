//! In-memory freshness caching for content collections.
//!
//! Each collection is memoized under its own key with a fetch timestamp;
//! callers inside the freshness window get the cached value without a new
//! retrieval. Nothing is persisted - the site content is read-only and cheap
//! to re-fetch.

pub mod store;

pub use store::{CachedEntry, CollectionCache, DEFAULT_FRESHNESS_MINUTES};
