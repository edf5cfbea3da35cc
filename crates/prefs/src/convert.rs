//! Conversion from raw store values to typed preference values.
//!
//! Invariants:
//! - The result is either `None` or a `PrefValue` whose kind equals `pref.kind()`.
//! - A raw value of the wrong shape reads exactly like an unset preference.
//! - Empty strings are unset; integers are never accepted.

use std::collections::BTreeMap;

use crate::registry::{NoteroPref, PageTitleFormat, PrefKind};
use crate::value::{PrefValue, RawPrefValue};

/// Convert a raw store value for `pref`, dropping anything that does not
/// match the preference's declared kind.
pub fn convert_raw_pref_value(pref: NoteroPref, raw: Option<&RawPrefValue>) -> Option<PrefValue> {
    let raw = raw?;
    match pref.kind() {
        PrefKind::Boolean => match raw {
            RawPrefValue::Bool(value) => Some(PrefValue::Bool(*value)),
            _ => None,
        },
        PrefKind::String => match raw {
            RawPrefValue::String(value) if !value.is_empty() => {
                Some(PrefValue::String(value.clone()))
            }
            _ => None,
        },
        PrefKind::PageTitleFormat => match raw {
            RawPrefValue::String(value) => {
                PageTitleFormat::from_raw(value).map(PrefValue::PageTitleFormat)
            }
            _ => None,
        },
    }
}

/// Convert a raw per-key map, such as a deserialized snapshot, dropping
/// entries that do not match their key's declared kind.
pub fn convert_raw_snapshot(
    raw: BTreeMap<NoteroPref, RawPrefValue>,
) -> BTreeMap<NoteroPref, PrefValue> {
    raw.into_iter()
        .filter_map(|(pref, raw)| {
            let value = convert_raw_pref_value(pref, Some(&raw))?;
            Some((pref, value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn convert(pref: NoteroPref, raw: impl Into<RawPrefValue>) -> Option<PrefValue> {
        convert_raw_pref_value(pref, Some(&raw.into()))
    }

    #[test]
    fn test_absent_is_absent_for_every_pref() {
        for pref in NoteroPref::ALL {
            assert_eq!(convert_raw_pref_value(pref, None), None, "{pref}");
        }
    }

    #[test]
    fn test_boolean_pref() {
        assert_eq!(convert(NoteroPref::SyncNotes, true), Some(PrefValue::Bool(true)));
        assert_eq!(convert(NoteroPref::SyncNotes, false), Some(PrefValue::Bool(false)));
        assert_eq!(convert(NoteroPref::SyncNotes, "true"), None);
        assert_eq!(convert(NoteroPref::SyncOnModifyItems, RawPrefValue::Int(1)), None);
    }

    #[test]
    fn test_string_pref() {
        assert_eq!(
            convert(NoteroPref::NotionToken, "secret_abc"),
            Some(PrefValue::String("secret_abc".to_string()))
        );
        assert_eq!(convert(NoteroPref::NotionToken, ""), None);
        assert_eq!(convert(NoteroPref::NotionDatabaseId, true), None);
        assert_eq!(convert(NoteroPref::LinkedCollectionId, RawPrefValue::Int(7)), None);
    }

    #[test]
    fn test_whitespace_string_is_kept() {
        assert_eq!(
            convert(NoteroPref::NotionDatabaseId, " "),
            Some(PrefValue::String(" ".to_string()))
        );
    }

    #[test]
    fn test_page_title_format_pref() {
        assert_eq!(
            convert(NoteroPref::PageTitleFormat, "itemTitle"),
            Some(PrefValue::PageTitleFormat(PageTitleFormat::ItemTitle))
        );
        assert_eq!(convert(NoteroPref::PageTitleFormat, "bogus"), None);
        assert_eq!(convert(NoteroPref::PageTitleFormat, "ITEMTITLE"), None);
        assert_eq!(convert(NoteroPref::PageTitleFormat, ""), None);
        assert_eq!(convert(NoteroPref::PageTitleFormat, true), None);
    }

    #[test]
    fn test_format_name_in_string_pref_stays_a_string() {
        assert_eq!(
            convert(NoteroPref::NotionToken, "itemTitle"),
            Some(PrefValue::String("itemTitle".to_string()))
        );
    }

    #[test]
    fn test_raw_snapshot_is_filtered_per_key() {
        let raw = BTreeMap::from([
            (NoteroPref::NotionToken, RawPrefValue::from("itemTitle")),
            (NoteroPref::PageTitleFormat, RawPrefValue::from("itemTitle")),
            (NoteroPref::SyncNotes, RawPrefValue::from("true")),
        ]);

        let converted = convert_raw_snapshot(raw);
        assert_eq!(converted.len(), 2);
        assert_eq!(
            converted[&NoteroPref::NotionToken],
            PrefValue::String("itemTitle".to_string())
        );
        assert_eq!(
            converted[&NoteroPref::PageTitleFormat],
            PrefValue::PageTitleFormat(PageTitleFormat::ItemTitle)
        );
    }

    fn raw_value_strategy() -> impl Strategy<Value = Option<RawPrefValue>> {
        let format_names = prop::sample::select(
            PageTitleFormat::ALL
                .iter()
                .map(|format| format.as_str().to_string())
                .collect::<Vec<_>>(),
        );
        prop_oneof![
            Just(None),
            any::<bool>().prop_map(|b| Some(RawPrefValue::Bool(b))),
            any::<i64>().prop_map(|n| Some(RawPrefValue::Int(n))),
            ".{0,24}".prop_map(|s| Some(RawPrefValue::String(s))),
            format_names.prop_map(|s| Some(RawPrefValue::String(s))),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn test_converted_kind_matches_declared_kind(
            pref in prop::sample::select(NoteroPref::ALL.to_vec()),
            raw in raw_value_strategy(),
        ) {
            if let Some(value) = convert_raw_pref_value(pref, raw.as_ref()) {
                prop_assert_eq!(value.kind(), pref.kind());
            }
        }

        #[test]
        fn test_integers_are_always_rejected(
            pref in prop::sample::select(NoteroPref::ALL.to_vec()),
            n in any::<i64>(),
        ) {
            prop_assert_eq!(convert_raw_pref_value(pref, Some(&RawPrefValue::Int(n))), None);
        }

        #[test]
        fn test_format_accepts_exactly_declared_variants(s in ".{0,24}") {
            let converted = convert_raw_pref_value(
                NoteroPref::PageTitleFormat,
                Some(&RawPrefValue::String(s.clone())),
            );
            let expected = PageTitleFormat::ALL
                .into_iter()
                .find(|format| format.as_str() == s)
                .map(PrefValue::PageTitleFormat);
            prop_assert_eq!(converted, expected);
        }
    }
}
