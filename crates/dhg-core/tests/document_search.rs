//! # Document Search Tests
//!
//! Load documents from disk and search them, exercising the loader and the
//! key finder together the way the CLI does.

use std::path::PathBuf;

use dhg_core::{
    find_destination, load_document, DhgError, KeyFinder, Prn, MAX_SUPPORTED_DEPTH,
};

fn write_fixture(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write fixture");
    path
}

#[test]
fn order_document_yields_paris() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "order.json", r#"{"order": {"destination": "Paris"}}"#);

    let doc = load_document(&path).unwrap();
    assert_eq!(find_destination(&doc).unwrap().as_deref(), Some("Paris"));
}

#[test]
fn depth_first_preorder_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(
        &dir,
        "order.json",
        r#"{
            "x": {"destination": "first"},
            "destination": "second"
        }"#,
    );

    let doc = load_document(&path).unwrap();
    assert_eq!(find_destination(&doc).unwrap().as_deref(), Some("first"));
}

#[test]
fn realistic_shipment_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(
        &dir,
        "shipment.json",
        r#"{
            "id": 1001,
            "customer": {"name": "ACME", "tags": ["priority", "fragile"]},
            "legs": [
                {"carrier": "rail", "stops": [{"city": "Lyon"}]},
                {"carrier": "road", "stops": [{"city": "Nice", "destination": "Nice Port"}]}
            ],
            "summary": {"destination": "Monaco"}
        }"#,
    );

    let doc = load_document(&path).unwrap();
    assert_eq!(find_destination(&doc).unwrap().as_deref(), Some("Nice Port"));
}

#[test]
fn absence_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "none.json", r#"{"a": 1, "b": [1, 2, 3]}"#);

    let doc = load_document(&path).unwrap();
    assert_eq!(find_destination(&doc).unwrap(), None);
}

#[test]
fn deeply_nested_document_hits_custom_limit() {
    let dir = tempfile::tempdir().unwrap();
    let nested = format!("{}{{\"destination\": \"bottom\"}}{}", "[".repeat(40), "]".repeat(40));
    let path = write_fixture(&dir, "deep.json", &nested);

    let doc = load_document(&path).unwrap();
    assert_eq!(find_destination(&doc).unwrap().as_deref(), Some("bottom"));

    let shallow = KeyFinder::default().with_max_depth(10).unwrap();
    assert!(matches!(
        shallow.find(&doc).unwrap_err(),
        DhgError::DepthExceeded { limit: 10 }
    ));
}

#[test]
fn document_at_supported_depth_is_searched() {
    let dir = tempfile::tempdir().unwrap();
    // 126 arrays around one object: 127 containers in total.
    let arrays = MAX_SUPPORTED_DEPTH - 1;
    let nested = format!(
        "{}{{\"destination\": \"floor\"}}{}",
        "[".repeat(arrays),
        "]".repeat(arrays)
    );
    let path = write_fixture(&dir, "deepest.json", &nested);

    let doc = load_document(&path).unwrap();
    assert_eq!(find_destination(&doc).unwrap().as_deref(), Some("floor"));
}

#[test]
fn document_past_supported_depth_is_depth_error() {
    let dir = tempfile::tempdir().unwrap();
    let nested = format!(
        "{}{{\"destination\": \"lost\"}}{}",
        "[".repeat(130),
        "]".repeat(130)
    );
    let path = write_fixture(&dir, "too-deep.json", &nested);

    match load_document(&path).unwrap_err() {
        DhgError::DepthExceeded { limit } => assert_eq!(limit, MAX_SUPPORTED_DEPTH),
        other => panic!("expected DepthExceeded, got {other:?}"),
    }
}

#[test]
fn prn_normalization_examples() {
    assert_eq!(Prn::new("X1").as_str(), "x1");
    assert_eq!(Prn::new("A B c").as_str(), "abc");
    assert_eq!(Prn::new(Prn::new("A B c").as_str()), Prn::new("A B c"));
}
