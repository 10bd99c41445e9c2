//! Tests for adapter module

use super::*;
use crate::error::Error;
use crate::paginator::Paginator;
use pretty_assertions::assert_eq;
use serde_json::json;

// ============================================================================
// Window Bounds Tests
// ============================================================================

#[test]
fn test_window_bounds() {
    assert_eq!(window_bounds(100, 0, 10), (0, 10));
    assert_eq!(window_bounds(95, 90, 10), (90, 95));
    assert_eq!(window_bounds(10, 20, 10), (10, 10));
    assert_eq!(window_bounds(10, 0, usize::MAX), (0, 10));
    assert_eq!(window_bounds(0, 0, 10), (0, 0));
}

// ============================================================================
// SliceAdapter Tests
// ============================================================================

#[test]
fn test_slice_adapter_count() {
    let data: Vec<i32> = (1..=100).collect();
    let adapter = SliceAdapter::new(&data);
    assert_eq!(adapter.count().unwrap(), 100);
    assert_eq!(adapter.len(), 100);
    assert!(!adapter.is_empty());
}

#[test]
fn test_slice_adapter_fetch_clamps_tail() {
    let data: Vec<i32> = (1..=25).collect();
    let adapter = SliceAdapter::new(&data);
    let mut out = Vec::new();

    adapter.fetch(20, 10, "id asc", &mut out).unwrap();
    assert_eq!(out, vec![21, 22, 23, 24, 25]);

    adapter.fetch(30, 10, "id asc", &mut out).unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_slice_adapter_ignores_sort() {
    let data = vec!["c", "a", "b"];
    let adapter = SliceAdapter::new(&data);
    let mut out = Vec::new();

    adapter.fetch(0, 3, "name desc", &mut out).unwrap();
    assert_eq!(out, vec!["c", "a", "b"]);
}

#[test]
fn test_slice_adapter_with_structs() {
    #[derive(Debug, Clone, PartialEq)]
    struct User {
        id: u32,
        name: String,
    }

    let users: Vec<User> = (1..=12)
        .map(|id| User {
            id,
            name: format!("user{id}"),
        })
        .collect();
    let adapter = SliceAdapter::new(&users);
    let mut paginator = Paginator::new(&adapter, 5);
    paginator.set_page(3);

    let page = paginator.results().unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].id, 11);
    assert_eq!(page[1].name, "user12");
}

#[test]
fn test_boxed_adapter() {
    let data: Vec<u8> = vec![1, 2, 3];
    let boxed: Box<SliceAdapter<'_, u8>> = Box::new(SliceAdapter::new(&data));
    let paginator = Paginator::new(&boxed, 2);

    assert_eq!(paginator.page_nums().unwrap(), 2);
    assert_eq!(paginator.results().unwrap(), vec![1, 2]);
}

// ============================================================================
// JsonAdapter Tests
// ============================================================================

fn people() -> JsonAdapter {
    JsonAdapter::new(vec![
        json!({"id": 3, "name": "carol", "team": {"rank": 2}}),
        json!({"id": 1, "name": "alice", "team": {"rank": 3}}),
        json!({"id": 2, "name": "bob"}),
        json!({"id": 4, "name": null, "team": {"rank": 1}}),
    ])
}

fn names(records: &[serde_json::Value]) -> Vec<serde_json::Value> {
    records.iter().map(|r| r["name"].clone()).collect()
}

#[test]
fn test_json_adapter_sorts_numbers() {
    let adapter = people();
    let mut out = Vec::new();

    adapter.fetch(0, 10, "id asc", &mut out).unwrap();
    let ids: Vec<i64> = out.iter().map(|r| r["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);

    adapter.fetch(0, 2, "id desc", &mut out).unwrap();
    let ids: Vec<i64> = out.iter().map(|r| r["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![4, 3]);
}

#[test]
fn test_json_adapter_sorts_mixed_ints_and_floats() {
    let adapter = JsonAdapter::new(vec![
        json!({"id": "a", "score": 9_007_199_254_740_993_i64}),
        json!({"id": "b", "score": 2.5}),
        json!({"id": "c", "score": 9_007_199_254_740_992.0}),
        json!({"id": "d", "score": -1}),
        json!({"id": "e", "score": 9_007_199_254_740_992_i64}),
        json!({"id": "f", "score": 3}),
    ]);
    let mut out = Vec::new();

    adapter.fetch(0, 10, "score asc", &mut out).unwrap();
    let ids: Vec<&str> = out.iter().map(|r| r["id"].as_str().unwrap()).collect();
    assert_eq!(&ids[..3], &["d", "b", "f"]);

    let mut tail = ids[3..].to_vec();
    tail.sort_unstable();
    assert_eq!(tail, vec!["a", "c", "e"]);

    adapter.fetch(0, 2, "score desc", &mut out).unwrap();
    assert!(out.iter().all(|r| r["score"].as_f64().unwrap() > 1e15));
}

#[test]
fn test_json_adapter_sorts_strings_with_nulls_first() {
    let adapter = people();
    let mut out = Vec::new();

    adapter.fetch(0, 10, "name asc", &mut out).unwrap();
    assert_eq!(
        names(&out),
        vec![json!(null), json!("alice"), json!("bob"), json!("carol")]
    );
}

#[test]
fn test_json_adapter_sorts_nested_field_missing_first() {
    let adapter = people();
    let mut out = Vec::new();

    adapter.fetch(0, 10, "team.rank asc", &mut out).unwrap();
    assert_eq!(
        names(&out),
        vec![json!("bob"), json!(null), json!("carol"), json!("alice")]
    );
}

#[test]
fn test_json_adapter_rejects_bad_clause() {
    let adapter = people();
    let mut out = Vec::new();

    let err = adapter.fetch(0, 10, "name", &mut out).unwrap_err();
    assert!(matches!(err, Error::InvalidSortSpec { .. }));
}

#[test]
fn test_json_adapter_parse() {
    let adapter = JsonAdapter::parse(r#"[{"id": 1}, {"id": 2}]"#).unwrap();
    assert_eq!(adapter.count().unwrap(), 2);
    assert_eq!(adapter.records().len(), 2);

    let err = JsonAdapter::parse(r#"{"id": 1}"#).unwrap_err();
    assert!(err.to_string().contains("an object"));

    assert!(matches!(
        JsonAdapter::parse("not json"),
        Err(Error::JsonParse(_))
    ));
}

#[test]
fn test_json_adapter_from_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.json");
    std::fs::write(&path, r#"[{"id": 2}, {"id": 1}, {"id": 3}]"#).unwrap();

    let adapter = JsonAdapter::from_path(&path).unwrap();
    let mut paginator = Paginator::new(&adapter, 2);
    paginator.set_page(2);

    let page = paginator.results().unwrap();
    assert_eq!(page, vec![json!({"id": 3})]);

    assert!(matches!(
        JsonAdapter::from_path(dir.path().join("missing.json")),
        Err(Error::FileNotFound { .. })
    ));
}
