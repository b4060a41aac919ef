//! Strict JSON decoder
//!
//! Record members are matched against the tag name first, then the
//! language-level field name exactly, then case-insensitively. Members with
//! no matching field are rejected unless `deny_unknown_fields` is off.

use std::sync::Arc;

use serde_json::Value as Json;

use super::Decoder;
use crate::error::{OpError, OpResult};
use crate::tags::FieldTagRegistry;
use crate::value::{Key, Mapping, Optional, Record, RecordType, Sequence, Type, Value};

/// JSON decoder driven by the target `Type`
#[derive(Debug, Clone)]
pub struct JsonDecoder {
    tags: Arc<FieldTagRegistry>,
    deny_unknown_fields: bool,
}

impl JsonDecoder {
    /// Strict decoder resolving record tags through `tags`
    #[must_use]
    pub fn new(tags: Arc<FieldTagRegistry>) -> Self {
        Self {
            tags,
            deny_unknown_fields: true,
        }
    }

    #[must_use]
    pub fn with_deny_unknown_fields(mut self, deny: bool) -> Self {
        self.deny_unknown_fields = deny;
        self
    }

    fn decode_value(&self, raw: &Json, ty: &Type) -> OpResult<Value> {
        match ty {
            Type::Any => Ok(decode_any(raw)),
            Type::Bool => match raw {
                Json::Bool(b) => Ok(Value::Bool(*b)),
                other => Err(cannot_decode(other, ty)),
            },
            Type::Int => raw
                .as_i64()
                .map(Value::Int)
                .ok_or_else(|| cannot_decode(raw, ty)),
            Type::Float => raw
                .as_f64()
                .map(Value::Float)
                .ok_or_else(|| cannot_decode(raw, ty)),
            Type::Str => match raw {
                Json::String(s) => Ok(Value::Str(s.clone())),
                other => Err(cannot_decode(other, ty)),
            },
            Type::Seq(elem) => match raw {
                Json::Null => Ok(ty.zero()),
                Json::Array(items) => {
                    let items = items
                        .iter()
                        .map(|item| self.decode_value(item, elem))
                        .collect::<OpResult<Vec<_>>>()?;
                    Ok(Value::Seq(Sequence::new((**elem).clone(), items)?))
                }
                other => Err(cannot_decode(other, ty)),
            },
            Type::Map(key, value) => match raw {
                Json::Null => Ok(ty.zero()),
                Json::Object(members) => {
                    let mut map = Mapping::empty((**key).clone(), (**value).clone());
                    for (name, member) in members {
                        let k = decode_key(name, key)?;
                        let v = self.decode_value(member, value)?;
                        map.insert(k, v)?;
                    }
                    Ok(Value::Map(map))
                }
                other => Err(cannot_decode(other, ty)),
            },
            Type::Record(record) => match raw {
                Json::Null => Ok(ty.zero()),
                Json::Object(members) => self.decode_record(members, record),
                other => Err(cannot_decode(other, ty)),
            },
            Type::Optional(inner) => match raw {
                Json::Null => Ok(ty.zero()),
                other => {
                    let value = self.decode_value(other, inner)?;
                    Ok(Value::Optional(Optional {
                        ty: (**inner).clone(),
                        value: Some(Box::new(value)),
                    }))
                }
            },
        }
    }

    fn decode_record(
        &self,
        members: &serde_json::Map<String, Json>,
        ty: &Arc<RecordType>,
    ) -> OpResult<Value> {
        let mut record = Record::zero(ty);
        let table = self.tags.table_for(ty);
        for (name, member) in members {
            let position = table.position(name).or_else(|| ty.position_by_name(name));
            match position {
                Some(pos) => {
                    let field_ty = ty.fields()[pos].ty();
                    record.fields[pos] = self.decode_value(member, field_ty)?;
                }
                None if self.deny_unknown_fields => {
                    return Err(OpError::decode(format!(
                        "unknown field \"{name}\" for record {ty}"
                    )));
                }
                None => {
                    log::trace!("ignoring unknown field \"{name}\" for record {ty}");
                }
            }
        }
        Ok(Value::Record(record))
    }
}

impl Decoder for JsonDecoder {
    fn decode(&self, raw: &Json, ty: &Type) -> OpResult<Value> {
        self.decode_value(raw, ty)
    }
}

fn cannot_decode(raw: &Json, ty: &Type) -> OpError {
    OpError::decode(format!("cannot decode JSON {} into {ty}", json_kind(raw)))
}

fn json_kind(raw: &Json) -> &'static str {
    match raw {
        Json::Null => "null",
        Json::Bool(_) => "bool",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}

fn decode_key(name: &str, ty: &Type) -> OpResult<Key> {
    match ty {
        Type::Str | Type::Any => Ok(Key::Str(name.to_string())),
        Type::Int => name
            .parse::<i64>()
            .map(Key::Int)
            .map_err(|_| OpError::decode(format!("cannot decode object key \"{name}\" into int"))),
        other => Err(OpError::decode(format!(
            "unsupported mapping key type {other}"
        ))),
    }
}

/// Shape-driven decoding for `Any` slots
fn decode_any(raw: &Json) -> Value {
    match raw {
        Json::Null => Type::Any.zero(),
        Json::Bool(b) => Value::Bool(*b),
        Json::Number(n) => n
            .as_i64()
            .map_or_else(|| Value::Float(n.as_f64().unwrap_or_default()), Value::Int),
        Json::String(s) => Value::Str(s.clone()),
        Json::Array(items) => Value::Seq(Sequence {
            elem: Type::Any,
            items: items.iter().map(decode_any).collect(),
        }),
        Json::Object(members) => Value::Map(Mapping {
            key: Type::Str,
            value: Type::Any,
            entries: members
                .iter()
                .map(|(k, v)| (Key::Str(k.clone()), decode_any(v)))
                .collect(),
        }),
    }
}
