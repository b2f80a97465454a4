//! HTTP client module for the academy content endpoint.
//!
//! The endpoint serves each collection as a JSON array at
//! `/api/content/{collection}`. No authentication is required; any
//! non-success response is reported as a generic retrieval failure for that
//! collection.

pub mod client;
pub mod error;

pub use client::ContentClient;
pub use error::ContentError;

use std::fmt;

/// A named group of same-typed entities served by the content endpoint.
/// Events are the one collection not backed by the endpoint; they resolve
/// from the in-memory catalog but share the same cache keying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Events,
    Sponsors,
    CampsClinics,
    Tryouts,
    Posts,
}

impl Collection {
    /// URL path segment under `/api/content/`.
    pub fn path(&self) -> &'static str {
        match self {
            Collection::Events => "events",
            Collection::Sponsors => "sponsors",
            Collection::CampsClinics => "camps-clinics",
            Collection::Tryouts => "tryouts",
            Collection::Posts => "posts",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_paths() {
        assert_eq!(Collection::Sponsors.path(), "sponsors");
        assert_eq!(Collection::CampsClinics.path(), "camps-clinics");
        assert_eq!(Collection::Tryouts.path(), "tryouts");
        assert_eq!(Collection::Posts.path(), "posts");
        assert_eq!(Collection::Events.to_string(), "events");
    }
}
