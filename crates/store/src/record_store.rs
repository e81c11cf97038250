//! RecordStore: the injectable source of searchable records
//!
//! ## Design
//!
//! The matcher never touches a concrete dataset - it asks a [`RecordStore`]
//! for the records of one concrete entity type at a time. Expanding the
//! "all" pseudo-type is the caller's responsibility, not the store's.
//!
//! The store is fixed at initialization: no mutation operations exist.
//! Records are grouped by type up front so per-type lookup is a plain map
//! read.
//!
//! ## Thread Safety
//!
//! `RecordStore` is `Send + Sync` so the same store can back many sessions,
//! and so a remote-backed implementation can slot in behind the same trait
//! without changing the session contract.

use atrium_core::{EntityType, Record, Result};
use std::collections::HashMap;

// ============================================================================
// RecordStore Trait
// ============================================================================

/// Read-only source of entity records, keyed by concrete entity type
///
/// # Errors
///
/// The in-memory implementation never fails; the `Result` return exists so
/// a future remote-backed source can surface lookup failures through the
/// same boundary the controller already guards.
pub trait RecordStore: Send + Sync {
    /// All records of one concrete entity type, in insertion order
    ///
    /// Returns an empty sequence for a type with no records.
    fn records(&self, entity_type: EntityType) -> Result<Vec<Record>>;
}

// ============================================================================
// InMemoryRecordStore
// ============================================================================

/// Process-local record store, initialized once from a flat record list
///
/// # Example
///
/// ```
/// use atrium_store::{InMemoryRecordStore, RecordStore};
/// use atrium_core::{EntityType, Record};
///
/// let store = InMemoryRecordStore::with_records([Record::User {
///     id: "u-1".into(),
///     name: "Juan Pérez".into(),
///     email: "juan.perez@example.com".into(),
///     role: "manager".into(),
///     department: "Ventas".into(),
/// }]);
///
/// assert_eq!(store.records(EntityType::User).unwrap().len(), 1);
/// assert!(store.records(EntityType::Invoice).unwrap().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    by_type: HashMap<EntityType, Vec<Record>>,
}

impl InMemoryRecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a flat record list, grouping by entity type
    ///
    /// Relative order within each type follows the input order, which is
    /// the encounter order tie-breaks preserve downstream.
    pub fn with_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut by_type: HashMap<EntityType, Vec<Record>> = HashMap::new();
        for record in records {
            by_type.entry(record.entity_type()).or_default().push(record);
        }
        InMemoryRecordStore { by_type }
    }

    /// Number of records of one type
    pub fn count(&self, entity_type: EntityType) -> usize {
        self.by_type.get(&entity_type).map_or(0, Vec::len)
    }

    /// Total records across all types
    pub fn len(&self) -> usize {
        self.by_type.values().map(Vec::len).sum()
    }

    /// True if the store holds no records at all
    pub fn is_empty(&self) -> bool {
        self.by_type.values().all(Vec::is_empty)
    }
}

impl RecordStore for InMemoryRecordStore {
    fn records(&self, entity_type: EntityType) -> Result<Vec<Record>> {
        Ok(self.by_type.get(&entity_type).cloned().unwrap_or_default())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, name: &str) -> Record {
        Record::User {
            id: id.into(),
            name: name.into(),
            email: format!("{id}@example.com"),
            role: "analyst".into(),
            department: "Finanzas".into(),
        }
    }

    fn task(id: &str, title: &str) -> Record {
        Record::Task {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            status: "open".into(),
            priority: "low".into(),
            assignee: String::new(),
            due_at: None,
        }
    }

    #[test]
    fn test_empty_store() {
        let store = InMemoryRecordStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.records(EntityType::Project).unwrap().is_empty());
    }

    #[test]
    fn test_groups_by_type() {
        let store = InMemoryRecordStore::with_records([
            user("u-1", "Juan"),
            task("t-1", "Revisar presupuesto"),
            user("u-2", "María"),
        ]);

        assert_eq!(store.count(EntityType::User), 2);
        assert_eq!(store.count(EntityType::Task), 1);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_preserves_insertion_order_within_type() {
        let store = InMemoryRecordStore::with_records([
            user("u-1", "Juan"),
            user("u-2", "María"),
            user("u-3", "Lucía"),
        ]);

        let ids: Vec<String> = store
            .records(EntityType::User)
            .unwrap()
            .iter()
            .map(|r| r.id().to_string())
            .collect();
        assert_eq!(ids, vec!["u-1", "u-2", "u-3"]);
    }

    #[test]
    fn test_store_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<InMemoryRecordStore>();
    }
}
