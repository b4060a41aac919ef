//! Index and range access tests

use jqpath_core::prelude::*;
use jqpath_core::value::Handle;
use serde_json::json;

fn letters() -> Value {
    Value::seq(Type::Str, ["a", "b", "c", "d", "e"])
}

#[test]
fn test_index_returns_each_element() {
    let root = letters();
    let items = root.as_seq().expect("sequence").items().to_vec();

    for (i, expected) in items.iter().enumerate() {
        let index = Index::new(i64::try_from(i).expect("small index")).expect("index");
        assert_eq!(&index.read(&root).expect("in bounds"), expected);
    }
}

#[test]
fn test_index_past_the_end_is_out_of_bounds() {
    let root = letters();
    for i in [5, 6, 100] {
        let err = Index::new(i).expect("index").read(&root).expect_err("out of bounds");
        assert_eq!(err.kind(), ErrorKind::OutOfBounds);
    }
}

#[test]
fn test_negative_index_is_rejected_at_construction() {
    let err = Index::new(-1).expect_err("negative");
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_index_on_non_sequence_is_unsupported() {
    let root = Value::from(Mapping::empty(Type::Str, Type::Int));
    let err = Index::new(0).expect("index").read(&root).expect_err("mapping");
    assert_eq!(err.kind(), ErrorKind::UnsupportedOperation);
}

#[test]
fn test_index_place_is_settable() {
    let engine = PathEngine::new();
    let mut root = letters();

    Index::new(2)
        .expect("index")
        .then(engine.set("C"))
        .apply_to(&mut root)
        .expect("set element");
    assert_eq!(root.to_json(), json!(["a", "b", "C", "d", "e"]));
}

#[test]
fn test_range_is_inclusive() {
    let root = letters();
    let len = 5_i64;

    for from in 0..len {
        for to in from..len {
            let result = Range::new(from, to).expect("range").read(&root).expect("in bounds");
            let seq = result.as_seq().expect("sequence result");
            let expected = usize::try_from(to - from + 1).expect("length");
            assert_eq!(seq.len(), expected, "[{from}:{to}]");
            assert_eq!(seq.elem_type(), &Type::Str);
        }
    }

    let middle = Range::new(1, 2).expect("range").read(&root).expect("slice");
    assert_eq!(middle.to_json(), json!(["b", "c"]));
}

#[test]
fn test_invalid_range_bounds() {
    assert_eq!(Range::new(-1, 2).expect_err("negative").kind(), ErrorKind::InvalidArgument);
    assert_eq!(Range::new(3, 2).expect_err("inverted").kind(), ErrorKind::InvalidArgument);
    assert!(Range::new(2, 2).is_ok());
}

#[test]
fn test_range_end_past_the_end_is_out_of_bounds() {
    let err = Range::new(3, 5)
        .expect("range")
        .read(&letters())
        .expect_err("out of bounds");
    assert_eq!(err.kind(), ErrorKind::OutOfBounds);
}

#[test]
fn test_range_over_string_counts_characters() {
    let root = Value::from("héllo");
    let result = Range::new(1, 3).expect("range").read(&root).expect("substring");
    assert_eq!(result.as_str(), Some("éll"));
}

#[test]
fn test_range_result_is_detached() {
    let mut root = letters();
    let handle = Range::new(0, 1)
        .expect("range")
        .apply(Handle::place(&mut root))
        .expect("slice");
    assert!(!handle.is_settable());
}

#[test]
fn test_range_on_record_is_unsupported() {
    let ty = RecordType::builder("R").field("A", Type::Int).build();
    let root = Value::record(&ty);
    let err = Range::new(0, 0).expect("range").read(&root).expect_err("record");
    assert_eq!(err.kind(), ErrorKind::UnsupportedOperation);
}
