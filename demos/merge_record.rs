//! Merge a field map into a record, then merge entries into a nested mapping
//!
//! Run with `RUST_LOG=debug` to see compilation and tag-table logging.

use jqpath::{Jq, OpResult, PathEngine, Type, Value};
use jqpath_core::ops::{Chain, OpExt};
use jqpath_core::value::{Mapping, Record, RecordType};

fn main() -> OpResult<()> {
    env_logger::init();

    let sub = RecordType::builder("Sub").field("S", Type::seq(Type::Str)).build();
    let doc = RecordType::builder("Doc")
        .field("A", Type::Str)
        .field("Slice", Type::record(&sub))
        .field("B", Type::map(Type::Str, Type::record(&sub)))
        .build();

    let numbers: Vec<String> = (1..=10).map(|n| n.to_string()).collect();
    let coucou = Record::zero(&sub).with("S", Value::seq(Type::Str, ["0"]))?;
    let mut root = Value::from(
        Record::zero(&doc)
            .with("A", "coucou")?
            .with("Slice", Record::zero(&sub).with("S", Value::seq(Type::Str, numbers))?)?
            .with("B", Mapping::empty(Type::Str, Type::record(&sub)).with("coucou", coucou)?)?,
    );

    let engine = PathEngine::new();

    let fields = Mapping::empty(Type::Str, Type::Any).with("A", "wesh")?;
    Jq::with_engine(&engine, ". += %v")
        .debug()
        .value(fields)
        .apply(&mut root)?;
    println!("after field merge: {}", root.to_json());

    let replacement = Record::zero(&sub).with("S", Value::seq(Type::Str, ["11"]))?;
    let entries = Mapping::empty(Type::Str, Type::record(&sub)).with("coucou", replacement)?;
    let merged = Chain::new()
        .then(engine.dot("B"))
        .then(engine.addition(entries))
        .apply_to(&mut root)?;
    println!("merged mapping: {}", merged.to_json());

    let tail = Jq::with_engine(&engine, ".Slice.S[8:9]").read(&root)?;
    println!("last two numbers: {}", tail.to_json());

    Ok(())
}
