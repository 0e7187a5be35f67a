//! Property-based tests for bookmark keys and records.
//!
//! Keys must be a pure function of the url, and a saved bookmark must come
//! back from the store equal in every field.

use chrono::{TimeZone, Utc};
use cloudmarks::{storage_key, Bookmark, BookmarkStore, ContainerStore, MemoryContainer};
use proptest::prelude::*;

/// Strategy for generating valid URL strings.
fn arb_url() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("https"), Just("http")],
        "[a-z][a-z0-9]{2,15}",
        prop_oneof![Just(".com"), Just(".org"), Just(".net"), Just(".io")],
        proptest::option::of("/[a-z0-9]{1,10}"),
    )
        .prop_map(|(scheme, host, tld, path)| {
            format!("{}://{}{}{}", scheme, host, tld, path.unwrap_or_default())
        })
}

/// Strategy for whole bookmarks, including empty metadata and unicode text.
fn arb_bookmark() -> impl Strategy<Value = Bookmark> {
    (
        arb_url(),
        ".{0,20}",
        ".{0,40}",
        proptest::collection::vec("[a-z]{1,8}", 0..4),
        0i64..4_000_000_000,
        0u32..1_000_000_000,
    )
        .prop_map(|(url, name, description, tags, secs, nanos)| {
            let mut bookmark = Bookmark::from_link(&url)
                .expect("generated urls are valid")
                .with_name(name)
                .with_description(description)
                .with_tags(tags);
            bookmark.created_on = Utc.timestamp_opt(secs, nanos).unwrap();
            bookmark
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn key_is_deterministic_hex(url in arb_url()) {
        let key = storage_key(&url);
        prop_assert_eq!(&key, &storage_key(&url));
        prop_assert_eq!(key.len(), 64);
        prop_assert!(key.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn saved_bookmark_lists_back_unchanged(bookmark in arb_bookmark()) {
        let store = ContainerStore::new(MemoryContainer::new());
        store.save(&bookmark).unwrap();

        prop_assert_eq!(store.container().object_list(), vec![bookmark.storage_key()]);
        prop_assert_eq!(store.list().unwrap(), vec![bookmark]);
    }

    #[test]
    fn overwrite_keeps_only_the_latest(first in arb_bookmark(), name in ".{0,20}") {
        let store = ContainerStore::new(MemoryContainer::new());
        let second = first.clone().with_name(name);
        store.save(&first).unwrap();
        store.save(&second).unwrap();

        prop_assert_eq!(store.list().unwrap(), vec![second]);
    }

    #[test]
    fn list_by_tag_is_empty_for_any_tag(bookmark in arb_bookmark(), tag in ".{0,10}") {
        let store = ContainerStore::new(MemoryContainer::new());
        store.save(&bookmark).unwrap();
        prop_assert!(store.list_by_tag(&tag).unwrap().is_empty());
        for existing in &bookmark.tags {
            prop_assert!(store.list_by_tag(existing).unwrap().is_empty());
        }
    }
}
