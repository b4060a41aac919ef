//! Merge a payload into a sequence, mapping or record

use std::sync::Arc;

use super::{Chain, Dot, Op, Set};
use crate::decode::{Decoder, Payload};
use crate::error::{OpError, OpResult, type_mismatch_error};
use crate::tags::FieldTagRegistry;
use crate::value::{Handle, Key, Mapping, Optional, Record, Sequence, Type, Value};

/// Merge the payload into the target in place
///
/// - sequences get the payload's elements appended;
/// - mappings get every payload entry inserted, overwriting existing keys;
/// - records get every field named by a string-keyed payload mapping
///   assigned, or, for raw JSON objects, every member applied as a
///   field-level `Set`.
#[derive(Debug, Clone)]
pub struct Addition {
    payload: Payload,
    tags: Arc<FieldTagRegistry>,
    decoder: Arc<dyn Decoder>,
    then: Chain,
}

impl Addition {
    pub fn new(
        payload: impl Into<Payload>,
        tags: Arc<FieldTagRegistry>,
        decoder: Arc<dyn Decoder>,
    ) -> Self {
        Self {
            payload: payload.into(),
            tags,
            decoder,
            then: Chain::new(),
        }
    }

    /// Append an operation to the continuation
    #[must_use]
    pub fn then(mut self, op: impl Op + 'static) -> Self {
        self.then.push(op);
        self
    }

    /// Replace the continuation
    #[must_use]
    pub fn with_continuation(mut self, then: Chain) -> Self {
        self.then = then;
        self
    }

    #[inline]
    #[must_use]
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    fn extend_sequence(&self, seq: &mut Sequence) -> OpResult<()> {
        let target_ty = Type::seq(seq.elem.clone());
        match self.payload.resolve(self.decoder.as_ref(), &target_ty)? {
            Value::Seq(other) if other.elem == seq.elem => {
                seq.items.extend(other.items);
                Ok(())
            }
            Value::Seq(other) => Err(type_mismatch_error(
                "addition",
                Type::seq(other.elem),
                target_ty,
            )),
            other => Err(OpError::type_mismatch(format!(
                "addition: target is a sequence but value is {}",
                other.type_of()
            ))),
        }
    }

    fn merge_mapping(&self, map: &mut Mapping) -> OpResult<()> {
        let target_ty = Type::map(map.key.clone(), map.value.clone());
        let other = match self.payload.resolve(self.decoder.as_ref(), &target_ty)? {
            Value::Map(other) => other,
            other => {
                return Err(OpError::type_mismatch(format!(
                    "addition: target is a mapping but value is {}",
                    other.type_of()
                )));
            }
        };
        if !map.key.accepts(&other.key) {
            return Err(type_mismatch_error(
                "addition: mapping key",
                &other.key,
                &map.key,
            ));
        }

        let unwrap = !matches!(map.value, Type::Optional(_) | Type::Any);
        let mut entries = Vec::with_capacity(other.len());
        for (key, value) in other.entries {
            let value = if unwrap { unwrap_optional(value) } else { value };
            map.check_entry(&key, &value)?;
            entries.push((key, value));
        }
        map.entries.extend(entries);
        Ok(())
    }

    fn merge_record_fields(record: &mut Record, fields: Mapping) -> OpResult<()> {
        if !matches!(fields.key, Type::Str) {
            return Err(OpError::type_mismatch(format!(
                "addition: mapping merged into a record needs string keys, got {}",
                fields.key
            )));
        }

        let ty = Arc::clone(&record.ty);
        let mut assignments = Vec::with_capacity(fields.len());
        for (key, value) in fields.entries {
            let Key::Str(name) = key else {
                return Err(OpError::type_mismatch(format!(
                    "addition: non-string key {key} in record merge"
                )));
            };
            let pos = ty
                .position_by_name(&name)
                .ok_or_else(|| OpError::missing_key(&name, format!("record {ty}")))?;
            let field_ty = ty.fields()[pos].ty();
            let value = if matches!(field_ty, Type::Optional(_)) {
                value
            } else {
                unwrap_optional(value)
            };
            if value.type_of() != *field_ty {
                return Err(type_mismatch_error(
                    &format!("addition: field {name}"),
                    value.type_of(),
                    field_ty,
                ));
            }
            assignments.push((pos, value));
        }
        for (pos, value) in assignments {
            record.fields[pos] = value;
        }
        Ok(())
    }

    fn merge_record(&self, target: &mut Value) -> OpResult<()> {
        match &self.payload {
            Payload::Json(raw) => self.patch_record(target, raw),
            Payload::Value(Value::Map(fields)) => match target {
                Value::Record(record) => Self::merge_record_fields(record, fields.clone()),
                other => Err(OpError::unsupported_type(format!(
                    "addition: expected a record, found {}",
                    other.type_of()
                ))),
            },
            Payload::Value(other) => Err(OpError::type_mismatch(format!(
                "addition: target is a record but value is {}",
                other.type_of()
            ))),
        }
    }

    /// Apply every member of a raw JSON object as a field-level `Set`
    fn patch_record(&self, target: &mut Value, raw: &serde_json::Value) -> OpResult<()> {
        let serde_json::Value::Object(members) = raw else {
            return Err(OpError::decode(
                "addition: raw payload merged into a record must be a JSON object",
            ));
        };
        for (name, member) in members {
            let set = Set::new(Payload::Json(member.clone()), Arc::clone(&self.decoder));
            Dot::new(name, Arc::clone(&self.tags))
                .then(set)
                .apply(Handle::place(target))?;
        }
        Ok(())
    }
}

impl Op for Addition {
    fn apply<'a>(&self, input: Handle<'a>) -> OpResult<Handle<'a>> {
        let input = if self.payload.is_optional() {
            input
        } else {
            input.deref_optional_alloc()
        };

        let Handle::Place(target) = input else {
            return Err(OpError::not_settable("cannot merge into a detached value"));
        };

        if matches!(target, Value::Record(_)) {
            self.merge_record(target)?;
        } else {
            match &mut *target {
                Value::Seq(seq) => self.extend_sequence(seq)?,
                Value::Map(map) => self.merge_mapping(map)?,
                other => {
                    return Err(OpError::unsupported_type(format!(
                        "addition: cannot merge into {}",
                        other.type_of()
                    )));
                }
            }
        }

        self.then.apply(Handle::Place(target))
    }
}

fn unwrap_optional(value: Value) -> Value {
    match value {
        Value::Optional(Optional {
            value: Some(inner), ..
        }) => unwrap_optional(*inner),
        other => other,
    }
}
