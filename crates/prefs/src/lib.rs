//! Typed preferences for Notero.
//!
//! This crate maps Notero's closed set of preference keys onto an untyped,
//! path-keyed host preference store, converting every value read or observed
//! into the type declared for its key.

pub mod accessor;
pub mod branch;
pub mod constants;
pub mod convert;
pub mod error;
pub mod keys;
pub mod registry;
pub mod store;
pub mod sync_config;
pub mod value;

pub use accessor::NoteroPrefs;
pub use branch::{PrefBranch, env_var_or_none};
pub use convert::{convert_raw_pref_value, convert_raw_snapshot};
pub use error::PrefError;
pub use keys::Pref;
pub use registry::{
    NoteroPref, PageTitleFormat, PrefKind, UnknownNameError, page_title_format_l10n_ids,
};
pub use store::{MemoryPrefStore, MemoryStoreError, ObserverId, PrefStore, RawObserver};
pub use sync_config::{CollectionSyncConfig, CollectionSyncConfigs, SyncConfigError};
pub use value::{PrefType, PrefValue, RawPrefValue};
