use thiserror::Error;

use super::Collection;

/// The single retrieval-failure condition for a collection.
///
/// Transport failures, non-2xx statuses, and undecodable bodies all collapse
/// here. Display output carries only the collection name, which is all the
/// consuming page ever shows; the underlying cause is kept as a source so
/// logs stay diagnosable.
#[derive(Debug, Error)]
#[error("failed to fetch {collection}")]
pub struct ContentError {
    collection: Collection,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ContentError {
    pub fn retrieval(
        collection: Collection,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            collection,
            source: Some(source.into()),
        }
    }

    pub fn status(collection: Collection, status: reqwest::StatusCode) -> Self {
        Self::retrieval(collection, format!("content endpoint returned {}", status))
    }

    pub fn collection(&self) -> Collection {
        self.collection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_collection_name() {
        let err = ContentError::status(
            Collection::Sponsors,
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        );
        assert_eq!(err.to_string(), "failed to fetch sponsors");
        assert_eq!(err.collection(), Collection::Sponsors);
    }

    #[test]
    fn test_source_retained_for_logs() {
        use std::error::Error;

        let err = ContentError::status(
            Collection::Tryouts,
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        );
        let source = err.source().expect("status should be kept as source");
        assert!(source.to_string().contains("500"));
    }
}
