//! In-memory host preference store.
//!
//! Responsibilities:
//! - Hold raw values keyed by fully-qualified path.
//! - Dispatch change notifications to path observers.
//! - Reject writes to locked paths.
//! - Seed from a flat JSON settings dump.
//!
//! Invariants:
//! - Observers fire only when the stored value actually changes.
//! - Observers run after the store lock is released and may re-enter the store.
//! - Notifications follow write order only for writes made from one thread.
//!   Concurrent writers to the same path may have their notifications
//!   delivered in either order; observers that need the settled value
//!   should re-read it with `get`.
//! - Unregistering an unknown handle is a no-op.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use thiserror::Error;

use super::{PrefStore, RawObserver};
use crate::value::RawPrefValue;

type SharedObserver = Arc<dyn Fn(Option<&RawPrefValue>) + Send + Sync + 'static>;

/// Errors raised by `MemoryPrefStore`.
#[derive(Error, Debug)]
pub enum MemoryStoreError {
    #[error("Preference '{path}' is locked")]
    Locked { path: String },

    #[error("Failed to parse preference seed: {0}")]
    Seed(#[from] serde_json::Error),
}

/// Handle for an observer registered with `MemoryPrefStore`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObserverId(u64);

#[derive(Default)]
struct Inner {
    values: BTreeMap<String, RawPrefValue>,
    locked: BTreeSet<String>,
    observers: BTreeMap<ObserverId, (String, SharedObserver)>,
}

/// Thread-safe in-memory `PrefStore`.
#[derive(Default)]
pub struct MemoryPrefStore {
    inner: RwLock<Inner>,
    next_observer_id: AtomicU64,
}

impl MemoryPrefStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a JSON object mapping paths to string, boolean,
    /// or integer values.
    pub fn from_json(json: &str) -> Result<Self, MemoryStoreError> {
        let values: BTreeMap<String, RawPrefValue> = serde_json::from_str(json)?;
        tracing::debug!(count = values.len(), "Seeded preference store from JSON");
        Ok(Self {
            inner: RwLock::new(Inner {
                values,
                ..Inner::default()
            }),
            next_observer_id: AtomicU64::new(0),
        })
    }

    /// Mark `path` read-only. Subsequent `set` and `clear` calls fail.
    pub fn lock(&self, path: &str) {
        self.write_inner().locked.insert(path.to_string());
    }

    pub fn unlock(&self, path: &str) {
        self.write_inner().locked.remove(path);
    }

    pub fn is_locked(&self, path: &str) -> bool {
        self.read_inner().locked.contains(path)
    }

    /// Number of currently registered observers.
    pub fn observer_count(&self) -> usize {
        self.read_inner().observers.len()
    }

    /// Copy of every stored path and raw value.
    pub fn entries(&self) -> BTreeMap<String, RawPrefValue> {
        self.read_inner().values.clone()
    }

    fn read_inner(&self) -> std::sync::RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_inner(&self) -> std::sync::RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn ensure_unlocked(inner: &Inner, path: &str) -> Result<(), MemoryStoreError> {
        if inner.locked.contains(path) {
            tracing::debug!(path, "Rejected write to locked preference");
            return Err(MemoryStoreError::Locked {
                path: path.to_string(),
            });
        }
        Ok(())
    }

    fn observers_for(inner: &Inner, path: &str) -> Vec<SharedObserver> {
        inner
            .observers
            .values()
            .filter(|(watched, _)| watched == path)
            .map(|(_, observer)| Arc::clone(observer))
            .collect()
    }

    /// Deliver `value` to `observers` on the calling thread, without the lock held.
    fn notify(path: &str, observers: Vec<SharedObserver>, value: Option<&RawPrefValue>) {
        if observers.is_empty() {
            return;
        }
        tracing::trace!(path, count = observers.len(), "Dispatching preference change");
        for observer in observers {
            observer(value);
        }
    }
}

impl PrefStore for MemoryPrefStore {
    type Handle = ObserverId;
    type Error = MemoryStoreError;

    fn get(&self, path: &str) -> Option<RawPrefValue> {
        self.read_inner().values.get(path).cloned()
    }

    fn set(&self, path: &str, value: RawPrefValue) -> Result<(), Self::Error> {
        let observers = {
            let mut inner = self.write_inner();
            Self::ensure_unlocked(&inner, path)?;
            if inner.values.get(path) == Some(&value) {
                return Ok(());
            }
            inner.values.insert(path.to_string(), value.clone());
            Self::observers_for(&inner, path)
        };

        tracing::debug!(path, "Preference set");
        Self::notify(path, observers, Some(&value));
        Ok(())
    }

    fn clear(&self, path: &str) -> Result<(), Self::Error> {
        let observers = {
            let mut inner = self.write_inner();
            Self::ensure_unlocked(&inner, path)?;
            if inner.values.remove(path).is_none() {
                return Ok(());
            }
            Self::observers_for(&inner, path)
        };

        tracing::debug!(path, "Preference cleared");
        Self::notify(path, observers, None);
        Ok(())
    }

    fn register_observer(
        &self,
        path: &str,
        observer: RawObserver,
    ) -> Result<Self::Handle, Self::Error> {
        let id = ObserverId(self.next_observer_id.fetch_add(1, Ordering::Relaxed));
        self.write_inner()
            .observers
            .insert(id, (path.to_string(), Arc::from(observer)));
        tracing::trace!(path, ?id, "Registered preference observer");
        Ok(id)
    }

    fn unregister_observer(&self, handle: &Self::Handle) -> Result<(), Self::Error> {
        if self.write_inner().observers.remove(handle).is_some() {
            tracing::trace!(id = ?handle, "Unregistered preference observer");
        }
        Ok(())
    }
}

impl fmt::Debug for MemoryPrefStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.read_inner();
        f.debug_struct("MemoryPrefStore")
            .field("paths", &inner.values.keys().collect::<Vec<_>>())
            .field("locked", &inner.locked)
            .field("observers", &inner.observers.len())
            .finish()
    }
}
