//! JSON decoder tests

use std::sync::Arc;

use jqpath_core::prelude::*;
use serde_json::json;

fn decoder() -> JsonDecoder {
    JsonDecoder::new(Arc::new(FieldTagRegistry::new()))
}

fn person() -> Arc<RecordType> {
    RecordType::builder("Person")
        .tagged("Hello", "hello", Type::Str)
        .field("Age", Type::Int)
        .field("Tags", Type::seq(Type::Str))
        .build()
}

#[test]
fn test_record_members_match_tag_then_name() {
    let ty = person();
    let value = decoder()
        .decode(&json!({ "hello": "x", "age": 3, "TAGS": ["a"] }), &Type::record(&ty))
        .expect("decode");

    assert_eq!(value.to_json(), json!({ "hello": "x", "Age": 3, "Tags": ["a"] }));
}

#[test]
fn test_unknown_members_are_rejected_by_default() {
    let err = decoder()
        .decode(&json!({ "nope": 1 }), &Type::record(&person()))
        .expect_err("unknown member");
    assert_eq!(err.kind(), ErrorKind::DecodeError);
}

#[test]
fn test_unknown_members_ignored_when_allowed() {
    let value = decoder()
        .with_deny_unknown_fields(false)
        .decode(&json!({ "nope": 1, "Age": 4 }), &Type::record(&person()))
        .expect("lenient decode");
    assert_eq!(value.to_json()["Age"], json!(4));
}

#[test]
fn test_null_decodes_to_zero_values() {
    let d = decoder();
    let ty = person();

    let record = d.decode(&json!(null), &Type::record(&ty)).expect("record");
    assert_eq!(record, Value::record(&ty));

    let seq = d.decode(&json!(null), &Type::seq(Type::Int)).expect("seq");
    assert_eq!(seq.as_seq().map(|s| s.len()), Some(0));

    let opt = d.decode(&json!(null), &Type::optional(Type::Int)).expect("optional");
    assert_eq!(opt, Value::none(Type::Int));
}

#[test]
fn test_integer_keyed_mappings() {
    let value = decoder()
        .decode(&json!({ "1": "a", "2": "b" }), &Type::map(Type::Int, Type::Str))
        .expect("int keys");
    let map = value.as_map().expect("mapping");
    assert_eq!(map.get(&Key::Int(2)), Some(&Value::from("b")));

    let err = decoder()
        .decode(&json!({ "x": "a" }), &Type::map(Type::Int, Type::Str))
        .expect_err("non-numeric key");
    assert_eq!(err.kind(), ErrorKind::DecodeError);
}

#[test]
fn test_shape_mismatch_is_decode_error() {
    let d = decoder();
    for (raw, ty) in [
        (json!("x"), Type::Int),
        (json!(1.5), Type::Int),
        (json!([1]), Type::seq(Type::Str)),
        (json!({}), Type::Str),
    ] {
        let err = d.decode(&raw, &ty).expect_err("mismatch");
        assert_eq!(err.kind(), ErrorKind::DecodeError, "{raw} into {ty}");
    }
}

#[test]
fn test_any_slots_follow_json_shape() {
    let value = decoder()
        .decode(&json!({ "n": 1, "f": 1.5, "l": ["a"] }), &Type::Any)
        .expect("any");
    assert_eq!(value.to_json(), json!({ "n": 1, "f": 1.5, "l": ["a"] }));
}

#[test]
fn test_malformed_json_text_is_decode_error() {
    let err = Payload::json_str("{ \"a\": ").expect_err("truncated");
    assert_eq!(err.kind(), ErrorKind::DecodeError);
    assert!(Payload::json_str("[1, 2]").expect("valid").is_raw());
}

/// Decoder that upper-cases every string it produces
#[derive(Debug)]
struct Shouting(JsonDecoder);

impl Decoder for Shouting {
    fn decode(&self, raw: &serde_json::Value, ty: &Type) -> OpResult<Value> {
        match self.0.decode(raw, ty)? {
            Value::Str(s) => Ok(Value::Str(s.to_uppercase())),
            other => Ok(other),
        }
    }
}

#[test]
fn test_engine_uses_custom_decoder() {
    let base = PathEngine::new();
    let engine = base
        .clone()
        .with_decoder(Arc::new(Shouting(JsonDecoder::new(Arc::clone(base.tags())))));
    let ty = RecordType::builder("Greeting").field("Text", Type::Str).build();
    let mut root = Value::record(&ty);

    engine
        .compile_with(".Text = %v", json!("hi"))
        .expect("compile")
        .apply_to(&mut root)
        .expect("set");
    assert_eq!(root.to_json(), json!({ "Text": "HI" }));
}
