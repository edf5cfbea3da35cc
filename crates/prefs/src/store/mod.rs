//! Host preference store contract.
//!
//! Responsibilities:
//! - Define the raw, path-keyed operations the accessor consumes (`PrefStore`).
//! - Provide an in-memory host implementation (`MemoryPrefStore`).
//!
//! Does NOT handle:
//! - Typing or validating values (see `convert` module).
//! - Namespacing (paths arrive fully qualified).
//!
//! Invariants:
//! - Observer handles are opaque; callers only compare and pass them back.
//! - Observer callbacks receive the raw value after the change, `None` when cleared.
//! - Delivery order across concurrent writers is host-defined.

mod memory;

pub use memory::{MemoryPrefStore, MemoryStoreError, ObserverId};

use std::fmt::Debug;

use crate::value::RawPrefValue;

/// Callback invoked by the host store when a watched path changes.
pub type RawObserver = Box<dyn Fn(Option<&RawPrefValue>) + Send + Sync + 'static>;

/// An untyped, string-keyed preference store with change observers.
pub trait PrefStore {
    /// Token identifying a registered observer.
    type Handle: Clone + Eq + Debug;
    /// Failure raised by writes and observer registration.
    type Error: std::error::Error + Send + Sync + 'static;

    fn get(&self, path: &str) -> Option<RawPrefValue>;

    fn set(&self, path: &str, value: RawPrefValue) -> Result<(), Self::Error>;

    fn clear(&self, path: &str) -> Result<(), Self::Error>;

    fn register_observer(
        &self,
        path: &str,
        observer: RawObserver,
    ) -> Result<Self::Handle, Self::Error>;

    fn unregister_observer(&self, handle: &Self::Handle) -> Result<(), Self::Error>;
}
