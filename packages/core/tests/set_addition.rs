//! Assignment and merge tests

use std::sync::Arc;

use jqpath_core::prelude::*;
use serde_json::json;

struct Fixture {
    sub: Arc<RecordType>,
    doc: Arc<RecordType>,
}

impl Fixture {
    fn new() -> Self {
        let sub = RecordType::builder("Sub").field("S", Type::seq(Type::Str)).build();
        let doc = RecordType::builder("Doc")
            .field("A", Type::Str)
            .field("Slice", Type::record(&sub))
            .field("B", Type::map(Type::Str, Type::record(&sub)))
            .tagged("Count", "count", Type::optional(Type::Int))
            .build();
        Self { sub, doc }
    }

    fn sub(&self, items: &[&str]) -> Record {
        Record::zero(&self.sub)
            .with("S", Value::seq(Type::Str, items.iter().copied()))
            .expect("sub record")
    }

    fn entries(&self, key: &str, items: &[&str]) -> Mapping {
        Mapping::empty(Type::Str, Type::record(&self.sub))
            .with(key, self.sub(items))
            .expect("mapping")
    }

    fn root(&self) -> Value {
        let record = Record::zero(&self.doc)
            .with("A", "coucou")
            .and_then(|r| r.with("Slice", self.sub(&["1", "2", "3"])))
            .and_then(|r| r.with("B", self.entries("coucou", &["0"])))
            .expect("doc record");
        Value::from(record)
    }
}

#[test]
fn test_set_then_read_round_trip() {
    let engine = PathEngine::new();
    let fixture = Fixture::new();
    let mut root = fixture.root();

    engine
        .dot("A")
        .then(engine.set("wesh"))
        .apply_to(&mut root)
        .expect("set");
    assert_eq!(engine.dot("A").read(&root).expect("re-read").as_str(), Some("wesh"));

    let replacement = fixture.sub(&["x", "y"]);
    engine
        .dot("Slice")
        .then(engine.set(replacement.clone()))
        .apply_to(&mut root)
        .expect("set record");
    assert_eq!(
        engine.dot("Slice").read(&root).expect("re-read"),
        Value::from(replacement)
    );
}

#[test]
fn test_set_type_mismatch() {
    let engine = PathEngine::new();
    let mut root = Fixture::new().root();

    let err = engine
        .dot("A")
        .then(engine.set(5))
        .apply_to(&mut root)
        .expect_err("int into string");
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
}

#[test]
fn test_set_on_detached_value_is_not_settable() {
    let engine = PathEngine::new();
    let root = Fixture::new().root();

    let err = engine
        .dot("A")
        .then(engine.set("x"))
        .read(&root)
        .expect_err("detached");
    assert_eq!(err.kind(), ErrorKind::NotSettable);
}

#[test]
fn test_set_decodes_raw_json_into_target_type() {
    let engine = PathEngine::new();
    let mut root = Fixture::new().root();

    engine
        .dot("Slice")
        .then(engine.set(json!({ "S": ["p", "q"] })))
        .apply_to(&mut root)
        .expect("raw set");
    assert_eq!(root.to_json()["Slice"], json!({ "S": ["p", "q"] }));

    let err = engine
        .dot("Slice")
        .then(engine.set(json!({ "T": [] })))
        .apply_to(&mut root)
        .expect_err("unknown member");
    assert_eq!(err.kind(), ErrorKind::DecodeError);
}

#[test]
fn test_raw_set_replaces_the_whole_target() {
    let engine = PathEngine::new();
    let mut root = Fixture::new().root();

    engine
        .compile_with(". = %v", json!({ "A": "only" }))
        .expect("compile")
        .apply_to(&mut root)
        .expect("raw set");

    let json = root.to_json();
    assert_eq!(json["A"], json!("only"));
    assert_eq!(json["Slice"], json!({ "S": [] }), "absent members reset to zero");
    assert_eq!(json["B"], json!({}));
    assert_eq!(json["count"], json!(null));
}

#[test]
fn test_raw_merge_keeps_absent_fields() {
    let engine = PathEngine::new();
    let mut root = Fixture::new().root();

    engine
        .compile_with(". += %v", json!({ "A": "only" }))
        .expect("compile")
        .apply_to(&mut root)
        .expect("raw merge");

    let json = root.to_json();
    assert_eq!(json["A"], json!("only"));
    assert_eq!(json["Slice"], json!({ "S": ["1", "2", "3"] }));
}

#[test]
fn test_set_allocates_empty_optional() {
    let engine = PathEngine::new();
    let mut root = Fixture::new().root();
    assert_eq!(root.to_json()["count"], json!(null));

    engine
        .dot("count")
        .then(engine.set(3))
        .apply_to(&mut root)
        .expect("set through empty optional");
    assert_eq!(root.to_json()["count"], json!(3));
}

#[test]
fn test_set_optional_payload_replaces_wrapper() {
    let engine = PathEngine::new();
    let mut root = Fixture::new().root();

    engine
        .dot("count")
        .then(engine.set(Value::some(9)))
        .apply_to(&mut root)
        .expect("optional payload");
    assert_eq!(root.to_json()["count"], json!(9));
}

#[test]
fn test_mapping_merge_overwrites_entry() {
    let engine = PathEngine::new();
    let fixture = Fixture::new();
    let mut root = fixture.root();

    let merged = Chain::new()
        .then(engine.dot("B"))
        .then(engine.addition(fixture.entries("coucou", &["11"])))
        .apply_to(&mut root)
        .expect("merge");

    assert_eq!(merged.to_json(), json!({ "coucou": { "S": ["11"] } }));
    assert_eq!(root.to_json()["B"], json!({ "coucou": { "S": ["11"] } }));
}

#[test]
fn test_mapping_merge_is_idempotent() {
    let engine = PathEngine::new();
    let mut root = Value::from(Mapping::empty(Type::Str, Type::Int).with("a", 1).expect("map"));
    let patch = Mapping::empty(Type::Str, Type::Int)
        .with("a", 3)
        .and_then(|m| m.with("b", 2))
        .expect("patch");
    let merge = engine.addition(patch);

    merge.apply_to(&mut root).expect("first merge");
    let once = root.clone();
    merge.apply_to(&mut root).expect("second merge");

    assert_eq!(root, once);
    assert_eq!(root.to_json(), json!({ "a": 3, "b": 2 }));
}

#[test]
fn test_mapping_merge_rejects_incompatible_values() {
    let engine = PathEngine::new();
    let mut root = Value::from(Mapping::empty(Type::Str, Type::Int).with("a", 1).expect("map"));
    let patch = Mapping::empty(Type::Str, Type::Any)
        .with("b", 2)
        .and_then(|m| m.with("c", "three"))
        .expect("patch");

    let err = engine.addition(patch).apply_to(&mut root).expect_err("string value");
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    assert_eq!(root.to_json(), json!({ "a": 1 }), "nothing written on failure");
}

#[test]
fn test_mapping_merge_unwraps_optional_values() {
    let engine = PathEngine::new();
    let mut root = Value::from(Mapping::empty(Type::Str, Type::Int));
    let patch = Mapping::empty(Type::Str, Type::optional(Type::Int))
        .with("n", Value::some(5))
        .expect("patch");

    engine.addition(patch).apply_to(&mut root).expect("unwrapped into plain slots");
    assert_eq!(root.to_json(), json!({ "n": 5 }));
    assert_eq!(
        root.as_map().and_then(|m| m.get(&Key::from("n"))),
        Some(&Value::Int(5))
    );
}

#[test]
fn test_mapping_merge_keeps_optionals_for_optional_slots() {
    let engine = PathEngine::new();
    let mut root = Value::from(Mapping::empty(Type::Str, Type::optional(Type::Int)));
    let patch = Mapping::empty(Type::Str, Type::optional(Type::Int))
        .with("n", Value::some(5))
        .expect("patch");

    engine.addition(patch).apply_to(&mut root).expect("optional slots");
    assert_eq!(
        root.as_map().and_then(|m| m.get(&Key::from("n"))),
        Some(&Value::some(5))
    );
}

#[test]
fn test_sequence_merge_appends() {
    let engine = PathEngine::new();
    let mut root = Value::seq(Type::Str, ["a"]);

    engine
        .addition(Value::seq(Type::Str, ["b", "c"]))
        .apply_to(&mut root)
        .expect("append typed");
    engine
        .addition(json!(["d"]))
        .apply_to(&mut root)
        .expect("append raw");
    assert_eq!(root.to_json(), json!(["a", "b", "c", "d"]));

    let err = engine
        .addition(Value::seq(Type::Int, [1]))
        .apply_to(&mut root)
        .expect_err("element type");
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
}

#[test]
fn test_record_merge_from_field_mapping() {
    let engine = PathEngine::new();
    let mut root = Fixture::new().root();
    let fields = Mapping::empty(Type::Str, Type::Any).with("A", "wesh").expect("fields");

    engine.addition(fields).apply_to(&mut root).expect("field merge");
    assert_eq!(root.to_json()["A"], json!("wesh"));

    let unknown = Mapping::empty(Type::Str, Type::Any).with("Nope", 1).expect("fields");
    let err = engine.addition(unknown).apply_to(&mut root).expect_err("unknown field");
    assert_eq!(err.kind(), ErrorKind::KeyNotFound);
}

#[test]
fn test_record_merge_from_raw_json_patches_each_field() {
    let engine = PathEngine::new();
    let mut root = Fixture::new().root();

    engine
        .addition(json!({ "A": "wesh", "count": 2, "Slice": { "S": ["z"] } }))
        .apply_to(&mut root)
        .expect("raw patch");

    let json = root.to_json();
    assert_eq!(json["A"], json!("wesh"));
    assert_eq!(json["count"], json!(2));
    assert_eq!(json["Slice"], json!({ "S": ["z"] }));
    assert_eq!(json["B"], json!({ "coucou": { "S": ["0"] } }));
}

#[test]
fn test_merge_into_scalar_is_unsupported() {
    let engine = PathEngine::new();
    let mut root = Value::from("text");
    let err = engine
        .addition(Value::seq(Type::Str, ["a"]))
        .apply_to(&mut root)
        .expect_err("scalar target");
    assert_eq!(err.kind(), ErrorKind::UnsupportedType);
}

#[test]
fn test_merge_into_detached_value_is_not_settable() {
    let engine = PathEngine::new();
    let root = Value::seq(Type::Str, ["a"]);
    let err = engine
        .addition(Value::seq(Type::Str, ["b"]))
        .read(&root)
        .expect_err("detached");
    assert_eq!(err.kind(), ErrorKind::NotSettable);
}
