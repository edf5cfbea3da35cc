//! Typed accessor over a host preference store.
//!
//! Responsibilities:
//! - Read, write, and clear preferences by symbolic key.
//! - Convert every value leaving the store, including observed changes.
//! - Raise `MissingPreference` for required reads with no valid value.
//!
//! Does NOT handle:
//! - Persistence or locking (owned by the host store).
//! - Kind validation on writes through `set_value`.
//!
//! Invariants:
//! - Reads never fail; mismatched raw values read as `None`.
//! - Store errors from writes and observer calls are returned unchanged.
//! - No state is kept beyond the store and the namespace branch.

use std::collections::BTreeMap;

use crate::branch::PrefBranch;
use crate::convert::convert_raw_pref_value;
use crate::error::PrefError;
use crate::keys::Pref;
use crate::registry::NoteroPref;
use crate::store::{PrefStore, RawObserver};
use crate::value::{PrefType, PrefValue, RawPrefValue};

/// Typed view of the application's preferences in a host store.
#[derive(Debug)]
pub struct NoteroPrefs<S> {
    store: S,
    branch: PrefBranch,
}

impl<S: PrefStore> NoteroPrefs<S> {
    /// Wrap `store` using the default `extensions.notero` branch.
    pub fn new(store: S) -> Self {
        Self::with_branch(store, PrefBranch::default())
    }

    pub fn with_branch(store: S, branch: PrefBranch) -> Self {
        Self { store, branch }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn branch(&self) -> &PrefBranch {
        &self.branch
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Fully-qualified store path for `pref`.
    pub fn full_name(&self, pref: NoteroPref) -> String {
        self.branch.full_name(pref)
    }

    pub fn get<P: Pref>(&self) -> Option<P::Value> {
        self.get_value(P::PREF)
            .and_then(<P::Value as PrefType>::from_pref_value)
    }

    pub fn get_required<P: Pref>(&self) -> Result<P::Value, PrefError> {
        self.get::<P>().ok_or(PrefError::MissingPreference(P::PREF))
    }

    pub fn set<P: Pref>(&self, value: P::Value) -> Result<(), S::Error> {
        self.set_value(P::PREF, value.into_pref_value())
    }

    pub fn clear<P: Pref>(&self) -> Result<(), S::Error> {
        self.clear_value(P::PREF)
    }

    /// Watch `P` for changes. The handler receives the converted value, or
    /// `None` when the new raw value is absent or of the wrong kind.
    pub fn register_observer<P, F>(&self, handler: F) -> Result<S::Handle, S::Error>
    where
        P: Pref,
        F: Fn(Option<P::Value>) + Send + Sync + 'static,
    {
        self.register_value_observer(P::PREF, move |value| {
            handler(value.and_then(<P::Value as PrefType>::from_pref_value))
        })
    }

    pub fn unregister_observer(&self, handle: &S::Handle) -> Result<(), S::Error> {
        self.store.unregister_observer(handle)
    }

    /// Read `pref` without a static value type.
    pub fn get_value(&self, pref: NoteroPref) -> Option<PrefValue> {
        let raw = self.store.get(&self.full_name(pref));
        convert_raw_pref_value(pref, raw.as_ref())
    }

    pub fn get_required_value(&self, pref: NoteroPref) -> Result<PrefValue, PrefError> {
        self.get_value(pref)
            .ok_or(PrefError::MissingPreference(pref))
    }

    /// Write `value` for `pref` as-is. The value's kind is not checked
    /// against `pref.kind()`; a mismatched write reads back as `None`.
    pub fn set_value(&self, pref: NoteroPref, value: PrefValue) -> Result<(), S::Error> {
        self.store.set(&self.full_name(pref), value.into_raw())
    }

    pub fn clear_value(&self, pref: NoteroPref) -> Result<(), S::Error> {
        self.store.clear(&self.full_name(pref))
    }

    pub fn register_value_observer<F>(
        &self,
        pref: NoteroPref,
        handler: F,
    ) -> Result<S::Handle, S::Error>
    where
        F: Fn(Option<PrefValue>) + Send + Sync + 'static,
    {
        let observer: RawObserver = Box::new(move |raw: Option<&RawPrefValue>| {
            handler(convert_raw_pref_value(pref, raw))
        });
        self.store.register_observer(&self.full_name(pref), observer)
    }

    /// Every preference that currently holds a valid value.
    pub fn snapshot(&self) -> BTreeMap<NoteroPref, PrefValue> {
        NoteroPref::ALL
            .into_iter()
            .filter_map(|pref| self.get_value(pref).map(|value| (pref, value)))
            .collect()
    }
}
