//! Core types for the Atrium search engine
//!
//! This crate defines the foundational types shared by every other crate:
//! - EntityType / TypeFilter: the closed set of searchable categories
//! - Record: the immutable entity model (one variant per entity type)
//! - SearchFilters / SearchOptions: the query contract with partial-merge patches
//! - SearchResult / SearchPage: what the pipeline hands back to callers
//! - Error / Result: the error taxonomy
//!
//! No I/O, no state, no algorithms live here - only the vocabulary.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod entity;
pub mod error;
pub mod query;
pub mod record;
pub mod result;

// Re-export commonly used types
pub use entity::{expand_type_filters, EntityType, TypeFilter};
pub use error::{Error, Result};
pub use query::{
    DateRange, FilterPatch, OptionsPatch, SearchFilters, SearchOptions, SortBy, SortOrder,
    DEFAULT_LIMIT, DEFAULT_MIN_SCORE,
};
pub use record::Record;
pub use result::{SearchPage, SearchResult};
