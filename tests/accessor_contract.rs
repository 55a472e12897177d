//! Purpose: Contract coverage for navigation and coercion through the public API.
//! Exports: Integration tests only.
//! Role: Pin the fail-soft/fail-loud split callers depend on.
//! Invariants: Navigation chains never error; coercion mismatches always do.
//! Invariants: Assertions go through `loosejson::api` exactly as callers would.

use loosejson::api::{ErrorKind, Json, Target};
use serde_json::json;

#[test]
fn nested_path_and_index_chain() {
    let doc = Json::from_bytes(br#"{"a": {"b": [1, 2, 3]}}"#).expect("decode");
    assert_eq!(doc.get_path(&["a", "b"]).get_index(1).int().expect("int"), 2);
}

#[test]
fn empty_object_counts_as_null_but_still_counts() {
    let doc = Json::from_bytes(b"{}").expect("decode");
    assert!(doc.is_null());
    assert_eq!(doc.count().expect("mapping"), 0);
}

#[test]
fn absent_key_falls_back_to_supplied_default() {
    let doc = Json::from_bytes(br#"{"x": "hi"}"#).expect("decode");
    assert_eq!(doc.get("y").must_string_or("default"), "default");
    assert_eq!(doc.get("x").must_string(), "hi");
}

#[test]
fn chained_navigation_is_always_safe() {
    let doc = Json::from_bytes(br#"{"top": {"dict": {"value": 10}}}"#).expect("decode");
    assert_eq!(doc.get("top").get("dict").get("value").must_int(), 10);
    assert!(doc.get("nope").get("dict").get("value").is_null());
    assert_eq!(doc.get("nope").get("dict").get("value").must_int_or(42), 42);
}

#[test]
fn set_then_get_round_trips_through_the_same_document() {
    let mut doc = Json::from_bytes(b"{}").expect("decode");
    doc.set("name", "loosejson");
    doc.set("ids", json!([1, 2, 3]));
    assert_eq!(doc.get("name").as_str().expect("string"), "loosejson");
    assert_eq!(doc.get("ids").int64_array().expect("ints"), vec![1, 2, 3]);

    let wrapped = Json::from_value(json!({"inner": true}));
    doc.set("child", wrapped);
    assert!(doc.get("child").get("inner").as_bool().expect("bool"));
}

#[test]
fn check_get_reports_presence_where_get_cannot() {
    let doc = Json::from_bytes(br#"{"present": null, "real": 1}"#).expect("decode");
    assert!(doc.check_get("present").expect("key exists").is_null());
    assert!(doc.check_get("absent").is_none());
    assert_eq!(
        doc.check_get("real").expect("key exists").int64().expect("int"),
        1
    );
}

#[test]
fn coercion_errors_name_their_target() {
    let doc = Json::from_bytes(br#"{"s": "text"}"#).expect("decode");
    let err = doc.get("s").int().expect_err("not numeric");
    assert_eq!(err.kind(), ErrorKind::Type);
    assert_eq!(err.target(), Some(Target::Int));
    assert!(err.to_string().contains("cannot coerce to int"));
}

#[test]
fn stringify_null_data_is_an_error() {
    let doc = Json::from_bytes(b"null").expect("decode");
    let err = doc.stringify().expect_err("null data");
    assert_eq!(err.kind(), ErrorKind::NullData);

    let doc = Json::from_bytes(br#"{"a": 1}"#).expect("decode");
    assert_eq!(doc.stringify().expect("string"), r#"{"a":1}"#);
}

#[test]
fn structural_round_trip_through_encode() {
    let input = br#"{"mixed": [1, -2.5, "s", true, null, {"k": []}]}"#;
    let doc = Json::from_bytes(input).expect("decode");
    let bytes = doc.encode().expect("encode");
    let again = Json::from_bytes(&bytes).expect("re-decode");
    assert_eq!(doc.data(), again.data());
}

#[test]
fn version_matches_the_package() {
    assert_eq!(loosejson::version(), env!("CARGO_PKG_VERSION"));
}
