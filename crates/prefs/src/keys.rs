//! Compile-time typed preference keys.
//!
//! Each marker binds one `NoteroPref` to the Rust type its converted value
//! takes, so the typed accessors reject mistyped writes at compile time.

use crate::registry::{self, NoteroPref};
use crate::value::PrefType;

/// A preference key with a statically known value type.
pub trait Pref {
    const PREF: NoteroPref;
    type Value: PrefType;
}

macro_rules! typed_prefs {
    ($($(#[$meta:meta])* $marker:ident => $pref:ident: $value:ty;)*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            pub struct $marker;

            impl Pref for $marker {
                const PREF: NoteroPref = NoteroPref::$pref;
                type Value = $value;
            }
        )*
    };
}

typed_prefs! {
    /// JSON map of per-collection sync settings (see `sync_config`).
    CollectionSyncConfigs => CollectionSyncConfigs: String;
    LinkedCollectionId => LinkedCollectionId: String;
    NotionDatabaseId => NotionDatabaseId: String;
    /// Notion integration token.
    NotionToken => NotionToken: String;
    PageTitleFormat => PageTitleFormat: registry::PageTitleFormat;
    SyncNotes => SyncNotes: bool;
    SyncOnModifyItems => SyncOnModifyItems: bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::PrefKind;

    fn declared<P: Pref>() -> (NoteroPref, PrefKind) {
        (P::PREF, <P::Value as PrefType>::KIND)
    }

    #[test]
    fn test_marker_types_match_registry_kinds() {
        let markers = [
            declared::<CollectionSyncConfigs>(),
            declared::<LinkedCollectionId>(),
            declared::<NotionDatabaseId>(),
            declared::<NotionToken>(),
            declared::<PageTitleFormat>(),
            declared::<SyncNotes>(),
            declared::<SyncOnModifyItems>(),
        ];

        for (pref, kind) in markers {
            assert_eq!(pref.kind(), kind, "{pref}");
        }

        let covered: Vec<NoteroPref> = markers.iter().map(|(pref, _)| *pref).collect();
        assert_eq!(covered, NoteroPref::ALL.to_vec());
    }
}
