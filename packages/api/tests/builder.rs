//! Fluent builder tests

use jqpath::{ErrorKind, Jq, PathEngine, Payload, Type, Value};
use jqpath_core::value::{Mapping, Record, RecordType};
use serde_json::json;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn document() -> Value {
    let ty = RecordType::builder("Doc")
        .tagged("Title", "title", Type::Str)
        .field("Items", Type::seq(Type::Int))
        .field("Meta", Type::map(Type::Str, Type::Str))
        .build();
    Value::from(
        Record::zero(&ty)
            .with("Title", "draft")
            .and_then(|r| r.with("Items", Value::seq(Type::Int, [1, 2, 3])))
            .and_then(|r| {
                r.with(
                    "Meta",
                    Mapping::empty(Type::Str, Type::Str).with("lang", "en")?,
                )
            })
            .expect("document"),
    )
}

#[test]
fn test_read_leaves_root_untouched() {
    init_logging();
    let root = document();
    let before = root.clone();

    let title = Jq::path(".title").debug().read(&root).expect("read");
    assert_eq!(title.as_str(), Some("draft"));

    let items = jqpath::path(".Items[1:2]").read(&root).expect("range");
    assert_eq!(items.to_json(), json!([2, 3]));
    assert_eq!(root, before);
}

#[test]
fn test_value_binding_applies_in_place() {
    init_logging();
    let mut root = document();

    Jq::path(".title = %v")
        .value("final")
        .apply(&mut root)
        .expect("set");
    Jq::path(".Items += %v")
        .value(Value::seq(Type::Int, [4]))
        .apply(&mut root)
        .expect("append");

    let json = root.to_json();
    assert_eq!(json["title"], json!("final"));
    assert_eq!(json["Items"], json!([1, 2, 3, 4]));
}

#[test]
fn test_json_binding_merges_mapping() {
    init_logging();
    let mut root = document();

    let merged = Jq::path(".Meta += %v")
        .json(json!({ "lang": "fr", "tz": "UTC" }))
        .apply(&mut root)
        .expect("merge");

    assert_eq!(merged.to_json(), json!({ "lang": "fr", "tz": "UTC" }));
    assert_eq!(root.to_json()["Meta"], json!({ "lang": "fr", "tz": "UTC" }));
}

#[test]
fn test_json_text_binding() {
    let mut root = document();
    let builder = Jq::path(".Items = %v").json_str("[9]").expect("valid json");
    assert!(matches!(builder.payload(), Payload::Json(_)));

    builder.apply(&mut root).expect("set");
    assert_eq!(root.to_json()["Items"], json!([9]));

    let err = Jq::path(".Items = %v").json_str("[9").expect_err("invalid json");
    assert_eq!(err.kind(), ErrorKind::DecodeError);
}

#[test]
fn test_compiled_chain_is_reusable() {
    let engine = PathEngine::new();
    let chain = Jq::with_engine(&engine, ".Items[0]").compile().expect("compile");
    let root = document();

    for _ in 0..3 {
        assert_eq!(
            jqpath::OpExt::read(&chain, &root).expect("read").as_int(),
            Some(1)
        );
    }
    assert_eq!(Jq::with_engine(&engine, ".x").expression(), ".x");
}

#[test]
fn test_builder_errors_surface_unchanged() {
    let mut root = document();

    let err = Jq::path(".Nope").read(&root).expect_err("missing");
    assert_eq!(err.kind(), ErrorKind::KeyNotFound);

    let err = Jq::path(".title = %v").read(&root).expect_err("unbound placeholder");
    assert_eq!(err.kind(), ErrorKind::ParseError);

    let err = Jq::path(".title").value("x").apply(&mut root).expect_err("no assignment");
    assert_eq!(err.kind(), ErrorKind::ParseError);

    let err = Jq::path(".title = %v").value(1).apply(&mut root).expect_err("wrong type");
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
}
