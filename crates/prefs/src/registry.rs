//! Preference registry: the closed key set and its declared value kinds.
//!
//! Responsibilities:
//! - Define every preference key the application reads or writes (`NoteroPref`).
//! - Declare the single expected value kind for each key (`PrefKind`).
//! - Define the page title format variants and their localized message IDs.
//!
//! Does NOT handle:
//! - Building fully-qualified store paths (see `branch` module).
//! - Converting raw store values (see `convert` module).
//! - Resolving Fluent messages (the locale table is owned by the UI).
//!
//! Invariants:
//! - The key-to-kind mapping is total and fixed at compile time.
//! - Every `PageTitleFormat` variant has exactly one Fluent message ID.
//! - Stored names are case-sensitive; no normalization is applied.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named preference slot in the host store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NoteroPref {
    #[serde(rename = "collectionSyncConfigs")]
    CollectionSyncConfigs,
    #[serde(rename = "linkedCollectionID")]
    LinkedCollectionId,
    #[serde(rename = "notionDatabaseID")]
    NotionDatabaseId,
    #[serde(rename = "notionToken")]
    NotionToken,
    #[serde(rename = "pageTitleFormat")]
    PageTitleFormat,
    #[serde(rename = "syncNotes")]
    SyncNotes,
    #[serde(rename = "syncOnModifyItems")]
    SyncOnModifyItems,
}

impl NoteroPref {
    /// Every declared preference, in stored-name order.
    pub const ALL: [NoteroPref; 7] = [
        Self::CollectionSyncConfigs,
        Self::LinkedCollectionId,
        Self::NotionDatabaseId,
        Self::NotionToken,
        Self::PageTitleFormat,
        Self::SyncNotes,
        Self::SyncOnModifyItems,
    ];

    /// Name of the preference below the application namespace.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CollectionSyncConfigs => "collectionSyncConfigs",
            Self::LinkedCollectionId => "linkedCollectionID",
            Self::NotionDatabaseId => "notionDatabaseID",
            Self::NotionToken => "notionToken",
            Self::PageTitleFormat => "pageTitleFormat",
            Self::SyncNotes => "syncNotes",
            Self::SyncOnModifyItems => "syncOnModifyItems",
        }
    }

    /// The value kind every read of this preference is checked against.
    pub fn kind(self) -> PrefKind {
        match self {
            Self::CollectionSyncConfigs
            | Self::LinkedCollectionId
            | Self::NotionDatabaseId
            | Self::NotionToken => PrefKind::String,
            Self::PageTitleFormat => PrefKind::PageTitleFormat,
            Self::SyncNotes | Self::SyncOnModifyItems => PrefKind::Boolean,
        }
    }
}

impl fmt::Display for NoteroPref {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown preference or format name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {what}: '{name}'")]
pub struct UnknownNameError {
    what: &'static str,
    name: String,
}

impl FromStr for NoteroPref {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|pref| pref.as_str() == s)
            .ok_or_else(|| UnknownNameError {
                what: "preference",
                name: s.to_string(),
            })
    }
}

/// Expected semantic type of a preference value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefKind {
    /// Free-form, non-empty string.
    String,
    /// Boolean flag.
    Boolean,
    /// One of the `PageTitleFormat` variants, stored as its name.
    PageTitleFormat,
}

/// How the Notion page title is derived from a Zotero item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PageTitleFormat {
    ItemAuthorDateCitation,
    ItemCitationKey,
    ItemFullCitation,
    ItemInTextCitation,
    ItemShortTitle,
    ItemTitle,
}

impl PageTitleFormat {
    /// Every declared format, in stored-name order.
    pub const ALL: [PageTitleFormat; 6] = [
        Self::ItemAuthorDateCitation,
        Self::ItemCitationKey,
        Self::ItemFullCitation,
        Self::ItemInTextCitation,
        Self::ItemShortTitle,
        Self::ItemTitle,
    ];

    /// Stored representation of the format.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ItemAuthorDateCitation => "itemAuthorDateCitation",
            Self::ItemCitationKey => "itemCitationKey",
            Self::ItemFullCitation => "itemFullCitation",
            Self::ItemInTextCitation => "itemInTextCitation",
            Self::ItemShortTitle => "itemShortTitle",
            Self::ItemTitle => "itemTitle",
        }
    }

    /// Fluent message ID used to label this format in the preferences pane.
    pub fn l10n_id(self) -> &'static str {
        match self {
            Self::ItemAuthorDateCitation => "notero-page-title-format-item-author-date-citation",
            Self::ItemCitationKey => "notero-page-title-format-item-citation-key",
            Self::ItemFullCitation => "notero-page-title-format-item-full-citation",
            Self::ItemInTextCitation => "notero-page-title-format-item-in-text-citation",
            Self::ItemShortTitle => "notero-page-title-format-item-short-title",
            Self::ItemTitle => "notero-page-title-format-item-title",
        }
    }

    /// Membership test against the declared variants. Exact, case-sensitive match.
    pub fn from_raw(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|format| format.as_str() == raw)
    }
}

impl fmt::Display for PageTitleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageTitleFormat {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_raw(s).ok_or_else(|| UnknownNameError {
            what: "page title format",
            name: s.to_string(),
        })
    }
}

/// Variant-to-message table for building the format menu.
pub fn page_title_format_l10n_ids() -> [(PageTitleFormat, &'static str); 6] {
    PageTitleFormat::ALL.map(|format| (format, format.l10n_id()))
}
