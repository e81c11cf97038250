//! Error types for the Atrium search engine
//!
//! This module defines all error types used throughout the workspace.
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.
//!
//! Policy: errors never escape the session controller to its caller as
//! panics or `Err` returns - the controller converts them into a
//! human-readable state field. Inside the pipeline they propagate with `?`.

use crate::entity::EntityType;
use thiserror::Error;

/// Result type alias for Atrium operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the search engine
#[derive(Debug, Error)]
pub enum Error {
    /// The record store failed to produce candidates
    #[error("record store error: {0}")]
    Store(String),

    /// A record could not be processed during extraction or scoring
    #[error("malformed {entity_type} record {id:?}: {reason}")]
    MalformedRecord {
        /// Entity type of the offending record
        entity_type: EntityType,
        /// Record id
        id: String,
        /// What was wrong with it
        reason: String,
    },

    /// The key-value collaborator failed to read or write
    #[error("persistence error: {0}")]
    Persistence(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_store() {
        let err = Error::Store("backend unavailable".to_string());
        assert!(err.to_string().contains("record store error"));
        assert!(err.to_string().contains("backend unavailable"));
    }

    #[test]
    fn test_error_display_malformed_record() {
        let err = Error::MalformedRecord {
            entity_type: EntityType::Invoice,
            id: "i-9".to_string(),
            reason: "negative amount".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("invoice"));
        assert!(msg.contains("i-9"));
        assert!(msg.contains("negative amount"));
    }

    #[test]
    fn test_error_display_persistence() {
        let err = Error::Persistence("quota exceeded".to_string());
        assert!(err.to_string().contains("persistence error"));
    }
}
