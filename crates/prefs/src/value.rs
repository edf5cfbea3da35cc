//! Raw and typed preference values.
//!
//! Responsibilities:
//! - Model the host store's untyped value as a tagged variant (`RawPrefValue`).
//! - Model a converted value that matches a declared kind (`PrefValue`).
//! - Bridge Rust types to preference kinds for the typed accessors (`PrefType`).
//!
//! Invariants:
//! - Absence is always `Option::None`, never a variant.
//! - A `PrefValue` carries its kind in its tag; `kind()` never disagrees with it.

use serde::{Deserialize, Serialize};

use crate::registry::{PageTitleFormat, PrefKind};

/// A value exactly as the host store holds it.
///
/// Serialized untagged so that flat JSON settings dumps map onto it directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPrefValue {
    Bool(bool),
    Int(i64),
    String(String),
}

impl From<bool> for RawPrefValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for RawPrefValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<i64> for RawPrefValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<String> for RawPrefValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for RawPrefValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

/// A converted value whose shape matches its preference's declared kind.
///
/// Serializes as the stored representation. There is no `Deserialize`: a
/// bare string cannot tell a format name from a free-form string, so decode
/// through `RawPrefValue` and `convert_raw_pref_value` with the owning key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PrefValue {
    Bool(bool),
    PageTitleFormat(PageTitleFormat),
    String(String),
}

impl PrefValue {
    pub fn kind(&self) -> PrefKind {
        match self {
            Self::Bool(_) => PrefKind::Boolean,
            Self::PageTitleFormat(_) => PrefKind::PageTitleFormat,
            Self::String(_) => PrefKind::String,
        }
    }

    /// Representation written to the host store.
    pub fn into_raw(self) -> RawPrefValue {
        match self {
            Self::Bool(value) => RawPrefValue::Bool(value),
            Self::PageTitleFormat(format) => RawPrefValue::String(format.as_str().to_string()),
            Self::String(value) => RawPrefValue::String(value),
        }
    }
}

/// A Rust type that one preference kind converts into.
pub trait PrefType: Sized {
    const KIND: PrefKind;

    fn into_pref_value(self) -> PrefValue;

    /// Extract the typed value; `None` when the tag belongs to another kind.
    fn from_pref_value(value: PrefValue) -> Option<Self>;
}

impl PrefType for bool {
    const KIND: PrefKind = PrefKind::Boolean;

    fn into_pref_value(self) -> PrefValue {
        PrefValue::Bool(self)
    }

    fn from_pref_value(value: PrefValue) -> Option<Self> {
        match value {
            PrefValue::Bool(value) => Some(value),
            _ => None,
        }
    }
}

impl PrefType for String {
    const KIND: PrefKind = PrefKind::String;

    fn into_pref_value(self) -> PrefValue {
        PrefValue::String(self)
    }

    fn from_pref_value(value: PrefValue) -> Option<Self> {
        match value {
            PrefValue::String(value) => Some(value),
            _ => None,
        }
    }
}

impl PrefType for PageTitleFormat {
    const KIND: PrefKind = PrefKind::PageTitleFormat;

    fn into_pref_value(self) -> PrefValue {
        PrefValue::PageTitleFormat(self)
    }

    fn from_pref_value(value: PrefValue) -> Option<Self> {
        match value {
            PrefValue::PageTitleFormat(format) => Some(format),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_value_deserializes_json_primitives() {
        let raw: RawPrefValue = serde_json::from_str("true").unwrap();
        assert_eq!(raw, RawPrefValue::Bool(true));

        let raw: RawPrefValue = serde_json::from_str("42").unwrap();
        assert_eq!(raw, RawPrefValue::Int(42));

        let raw: RawPrefValue = serde_json::from_str("4294967296").unwrap();
        assert_eq!(raw, RawPrefValue::Int(4_294_967_296));

        let raw: RawPrefValue = serde_json::from_str("\"itemTitle\"").unwrap();
        assert_eq!(raw, RawPrefValue::String("itemTitle".to_string()));
    }

    #[test]
    fn test_raw_value_rejects_structured_json() {
        assert!(serde_json::from_str::<RawPrefValue>("[1, 2]").is_err());
        assert!(serde_json::from_str::<RawPrefValue>("{\"a\": 1}").is_err());
        assert!(serde_json::from_str::<RawPrefValue>("1.5").is_err());
    }

    #[test]
    fn test_page_title_format_is_written_as_its_name() {
        let raw = PrefValue::PageTitleFormat(PageTitleFormat::ItemCitationKey).into_raw();
        assert_eq!(raw, RawPrefValue::String("itemCitationKey".to_string()));
    }

    #[test]
    fn test_pref_type_extraction_rejects_other_tags() {
        assert_eq!(bool::from_pref_value(PrefValue::Bool(false)), Some(false));
        assert_eq!(bool::from_pref_value(PrefValue::String("true".into())), None);
        assert_eq!(
            String::from_pref_value(PrefValue::PageTitleFormat(PageTitleFormat::ItemTitle)),
            None
        );
        assert_eq!(
            PageTitleFormat::from_pref_value(PrefValue::String("itemTitle".into())),
            None
        );
    }

    #[test]
    fn test_pref_value_kind_matches_type_kind() {
        assert_eq!(true.into_pref_value().kind(), bool::KIND);
        assert_eq!("x".to_string().into_pref_value().kind(), String::KIND);
        assert_eq!(
            PageTitleFormat::ItemTitle.into_pref_value().kind(),
            PageTitleFormat::KIND
        );
    }
}
