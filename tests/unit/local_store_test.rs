//! End-to-end tests for the bookmark store over a directory-backed container.
//!
//! These drive the public API the same way the `mark` binary does, with a
//! temporary directory standing in for the bucket.

use std::fs;

use cloudmarks::{
    storage_key, App, Bookmark, BookmarkStore, Container, ContainerStore, LocalContainer,
    MarkError, Request, Status,
};
use tempfile::TempDir;

/// Helper: a store writing into a fresh temporary directory.
fn setup() -> (TempDir, ContainerStore<LocalContainer>) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let container = LocalContainer::open(dir.path()).expect("Failed to open container");
    (dir, ContainerStore::new(container))
}

#[test]
fn test_save_lands_at_url_hash() {
    let (dir, store) = setup();
    let bookmark = Bookmark::from_link("https://example.com")
        .unwrap()
        .with_name("Example")
        .with_tags(vec!["ref".to_string()]);

    store.save(&bookmark).unwrap();

    let expected = "100680ad546ce6a577f42f52df33b4cfdca756859e664b8d7de329b150d09ce9";
    assert_eq!(storage_key("https://example.com"), expected);

    let files: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(files, vec![expected.to_string()]);

    let stored: Bookmark =
        serde_json::from_slice(&fs::read(dir.path().join(expected)).unwrap()).unwrap();
    assert_eq!(stored, bookmark);
}

#[test]
fn test_second_save_of_same_url_wins() {
    let (_dir, store) = setup();
    let first = Bookmark::from_link("https://example.com").unwrap().with_name("old");
    let second = Bookmark::from_link("https://example.com")
        .unwrap()
        .with_name("new")
        .with_description("replaces the old one")
        .with_tags(vec!["a".to_string(), "b".to_string()]);

    store.save(&first).unwrap();
    store.save(&second).unwrap();

    assert_eq!(store.list().unwrap(), vec![second]);
}

#[test]
fn test_list_returns_every_saved_bookmark() {
    let (_dir, store) = setup();
    let urls = ["https://a.example", "https://b.example", "https://c.example"];
    for url in urls {
        store.save(&Bookmark::from_link(url).unwrap()).unwrap();
    }

    let mut listed: Vec<String> = store.list().unwrap().into_iter().map(|b| b.url).collect();
    listed.sort();
    assert_eq!(listed, urls);
}

#[test]
fn test_empty_directory_lists_nothing() {
    let (_dir, store) = setup();
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn test_corrupt_object_aborts_listing_with_partial_results() {
    let (dir, store) = setup();
    let a = Bookmark::from_link("https://a.example").unwrap();
    let c = Bookmark::from_link("https://c.example").unwrap();

    // Names chosen so the directory walk visits a, then b, then c
    store.container().put("a", serde_json::to_vec(&a).unwrap()).unwrap();
    fs::write(dir.path().join("b"), b"definitely not json").unwrap();
    store.container().put("c", serde_json::to_vec(&c).unwrap()).unwrap();

    let err = store.list().unwrap_err();
    match err {
        MarkError::ListAborted { loaded, source } => {
            assert_eq!(loaded, vec![a]);
            assert!(matches!(*source, MarkError::Serialization(_)));
        }
        other => panic!("expected ListAborted, got {other}"),
    }
}

#[test]
fn test_list_by_tag_stays_empty() {
    let (_dir, store) = setup();
    store
        .save(
            &Bookmark::from_link("https://example.com")
                .unwrap()
                .with_tags(vec!["ref".to_string()]),
        )
        .unwrap();

    assert!(store.list_by_tag("ref").unwrap().is_empty());
    assert!(store.list_by_tag("").unwrap().is_empty());
}

#[test]
fn test_malformed_link_writes_nothing() {
    let (dir, store) = setup();
    let app = App::new(store);
    let mut out = Vec::new();

    let status = app
        .run(
            Request::Save {
                link: "example dot com".to_string(),
                name: None,
                description: None,
                tags: Vec::new(),
            },
            &mut out,
        )
        .unwrap();

    assert_eq!(status, Status::InvalidLink);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_app_save_then_list() {
    let (_dir, store) = setup();
    let app = App::new(store);

    let mut out = Vec::new();
    let status = app
        .run(
            Request::Save {
                link: "https://rust-lang.org".to_string(),
                name: Some("Rust".to_string()),
                description: Some("language home".to_string()),
                tags: vec!["lang".to_string()],
            },
            &mut out,
        )
        .unwrap();
    assert_eq!(status, Status::Done);
    assert_eq!(out, b"OK\n");

    let mut out = Vec::new();
    app.run(Request::List, &mut out).unwrap();
    assert_eq!(out, b"https://rust-lang.org\n");
}
