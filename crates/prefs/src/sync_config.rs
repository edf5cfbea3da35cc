//! Structured view of the `collectionSyncConfigs` preference.
//!
//! Responsibilities:
//! - Parse the JSON object stored in `collectionSyncConfigs`.
//! - Serialize it back, clearing the preference when no collection remains.
//!
//! Invariants:
//! - An absent or empty preference reads as an empty map.
//! - Unknown fields in a collection entry are ignored on read.
//! - Host store write failures surface as the store's own error type.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::accessor::NoteroPrefs;
use crate::error::PrefError;
use crate::keys;
use crate::store::PrefStore;

/// Sync settings for one Zotero collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionSyncConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_enabled: Option<bool>,
    /// Notion select option mirroring the collection.
    #[serde(
        default,
        rename = "notionOptionID",
        skip_serializing_if = "Option::is_none"
    )]
    pub notion_option_id: Option<String>,
}

/// Collection sync settings keyed by collection ID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollectionSyncConfigs(BTreeMap<String, CollectionSyncConfig>);

impl CollectionSyncConfigs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, collection_id: &str) -> Option<&CollectionSyncConfig> {
        self.0.get(collection_id)
    }

    pub fn insert(&mut self, collection_id: impl Into<String>, config: CollectionSyncConfig) {
        self.0.insert(collection_id.into(), config);
    }

    pub fn remove(&mut self, collection_id: &str) -> Option<CollectionSyncConfig> {
        self.0.remove(collection_id)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// IDs of collections with syncing turned on.
    pub fn enabled_collection_ids(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter(|(_, config)| config.sync_enabled == Some(true))
            .map(|(id, _)| id.as_str())
    }

    pub fn parse(json: &str) -> Result<Self, PrefError> {
        serde_json::from_str(json).map_err(PrefError::InvalidSyncConfigs)
    }

    pub fn to_json(&self) -> Result<String, PrefError> {
        serde_json::to_string(self).map_err(PrefError::SerializeSyncConfigs)
    }
}

/// Failure while saving collection sync configs.
#[derive(Error, Debug)]
pub enum SyncConfigError<E> {
    /// The stored configs could not be parsed or serialized.
    #[error(transparent)]
    Pref(#[from] PrefError),

    /// The host store rejected the write.
    #[error(transparent)]
    Store(E),
}

impl<S: PrefStore> NoteroPrefs<S> {
    /// Load the collection sync configs. Absent reads as empty.
    pub fn load_sync_configs(&self) -> Result<CollectionSyncConfigs, PrefError> {
        match self.get::<keys::CollectionSyncConfigs>() {
            Some(json) => CollectionSyncConfigs::parse(&json),
            None => Ok(CollectionSyncConfigs::new()),
        }
    }

    /// Store `configs`, clearing the preference when empty.
    pub fn save_sync_configs(
        &self,
        configs: &CollectionSyncConfigs,
    ) -> Result<(), SyncConfigError<S::Error>> {
        let result = if configs.is_empty() {
            self.clear::<keys::CollectionSyncConfigs>()
        } else {
            self.set::<keys::CollectionSyncConfigs>(configs.to_json()?)
        };
        result.map_err(SyncConfigError::Store)
    }

    /// Apply `update` to one collection's config and save the result.
    pub fn update_sync_config<F>(
        &self,
        collection_id: &str,
        update: F,
    ) -> Result<(), SyncConfigError<S::Error>>
    where
        F: FnOnce(&mut CollectionSyncConfig),
    {
        let mut configs = self.load_sync_configs()?;
        let mut config = configs.remove(collection_id).unwrap_or_default();
        update(&mut config);
        if config != CollectionSyncConfig::default() {
            configs.insert(collection_id, config);
        }
        self.save_sync_configs(&configs)
    }
}
