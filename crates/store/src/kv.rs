//! Key-value persistence collaborator
//!
//! The search core keeps its live state volatile; the only thing a host may
//! choose to persist is recent-search history (and its own settings). That
//! happens through this narrow interface: `get`/`set`/`remove` over
//! serialized string values, plus change notifications so multiple
//! consumers in the same runtime stay in sync.
//!
//! [`InMemoryKeyValue`] is the process-local implementation. A browser- or
//! disk-backed store implements the same trait on the host side.

use atrium_core::Result;
use dashmap::DashMap;
use parking_lot::RwLock;

/// Change listener invoked with the key that was set or removed
pub type ChangeListener = Box<dyn Fn(&str) + Send + Sync>;

// ============================================================================
// KeyValueStore Trait
// ============================================================================

/// Narrow persistence interface over serialized string values
///
/// # Errors
///
/// The in-memory implementation never fails; the fallible signatures exist
/// because real host backends (browser storage, disk) can reject writes,
/// and the session controller degrades gracefully when they do.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the value stored under `key`, if any
    fn remove(&self, key: &str) -> Result<()>;

    /// Register a listener called with the key after every `set`/`remove`
    fn subscribe(&self, listener: ChangeListener);
}

// ============================================================================
// InMemoryKeyValue
// ============================================================================

/// Process-local key-value store with change notifications
///
/// # Example
///
/// ```
/// use atrium_store::{InMemoryKeyValue, KeyValueStore};
///
/// let kv = InMemoryKeyValue::new();
/// kv.set("settings.theme", "dark").unwrap();
/// assert_eq!(kv.get("settings.theme").unwrap().as_deref(), Some("dark"));
/// kv.remove("settings.theme").unwrap();
/// assert_eq!(kv.get("settings.theme").unwrap(), None);
/// ```
#[derive(Default)]
pub struct InMemoryKeyValue {
    map: DashMap<String, String>,
    listeners: RwLock<Vec<ChangeListener>>,
}

impl InMemoryKeyValue {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn notify(&self, key: &str) {
        for listener in self.listeners.read().iter() {
            listener(key);
        }
    }
}

impl KeyValueStore for InMemoryKeyValue {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.map.get(key).map(|entry| entry.value().clone()))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.map.insert(key.to_string(), value.to_string());
        self.notify(key);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.map.remove(key);
        self.notify(key);
        Ok(())
    }

    fn subscribe(&self, listener: ChangeListener) {
        self.listeners.write().push(listener);
    }
}

// ============================================================================
// Tests
// ============================================================================
