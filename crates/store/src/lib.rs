//! Record and key-value stores for the Atrium search engine
//!
//! This crate provides the two collaborators the search core depends on:
//! - [`RecordStore`]: the injectable, read-only source of entity records,
//!   with [`InMemoryRecordStore`] as the process-local implementation
//! - [`KeyValueStore`]: the narrow persistence collaborator (get/set/remove
//!   plus change notifications), with [`InMemoryKeyValue`] as the
//!   process-local implementation
//!
//! The `sample` module ships the portal's demo dataset as a ready-made
//! fixture.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod kv;
pub mod record_store;
pub mod sample;

// Re-export commonly used types
pub use kv::{InMemoryKeyValue, KeyValueStore};
pub use record_store::{InMemoryRecordStore, RecordStore};
pub use sample::sample_store;
