//! Serialization of values
//!
//! Records are written as maps keyed by each field's external name (its tag)
//! or, when untagged, its language-level name. Fields tagged `-` are skipped.
//! Mapping keys are written as strings, in sorted order.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use super::Value;
use super::containers::Record;

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Str(s) => serializer.serialize_str(s),
            Value::Seq(seq) => {
                let mut out = serializer.serialize_seq(Some(seq.len()))?;
                for item in seq.items() {
                    out.serialize_element(item)?;
                }
                out.end()
            }
            Value::Map(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map.sorted_entries() {
                    out.serialize_entry(&key.to_string(), value)?;
                }
                out.end()
            }
            Value::Record(record) => {
                let fields = visible_fields(record);
                let mut out = serializer.serialize_map(Some(fields.len()))?;
                for (name, value) in fields {
                    out.serialize_entry(name, value)?;
                }
                out.end()
            }
            Value::Optional(opt) => match opt.get() {
                Some(inner) => serializer.serialize_some(inner),
                None => serializer.serialize_none(),
            },
        }
    }
}

fn visible_fields(record: &Record) -> Vec<(&str, &Value)> {
    record
        .record_type()
        .fields()
        .iter()
        .zip(record.fields())
        .filter(|(def, _)| !def.is_skipped())
        .map(|(def, value)| (def.external_name().unwrap_or(def.name()), value))
        .collect()
}

pub(super) fn to_json(value: &Value) -> serde_json::Value {
    use serde_json::Value as Json;

    match value {
        Value::Bool(b) => Json::Bool(*b),
        Value::Int(i) => Json::from(*i),
        Value::Float(f) => serde_json::Number::from_f64(*f).map_or(Json::Null, Json::Number),
        Value::Str(s) => Json::String(s.clone()),
        Value::Seq(seq) => Json::Array(seq.items().iter().map(to_json).collect()),
        Value::Map(map) => Json::Object(
            map.sorted_entries()
                .into_iter()
                .map(|(k, v)| (k.to_string(), to_json(v)))
                .collect(),
        ),
        Value::Record(record) => Json::Object(
            visible_fields(record)
                .into_iter()
                .map(|(name, v)| (name.to_string(), to_json(v)))
                .collect(),
        ),
        Value::Optional(opt) => opt.get().map_or(Json::Null, to_json),
    }
}
