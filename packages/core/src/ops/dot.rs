//! Field access

use std::sync::Arc;

use super::{Chain, Op};
use crate::error::{OpError, OpResult};
use crate::tags::FieldTagRegistry;
use crate::value::{Handle, Key, Mapping, Record, Type, Value};

/// Access a named field of a record or a string key of a mapping
///
/// Record fields resolve by external (tag) name first, then by
/// language-level name, ignoring case. Mapping entries are copied, the
/// continuation runs on the copy, and the copy is written back under the
/// same key; the result is returned detached.
#[derive(Debug, Clone)]
pub struct Dot {
    key: String,
    tags: Arc<FieldTagRegistry>,
    then: Chain,
}

impl Dot {
    /// Field access for `key`; surrounding whitespace is trimmed
    ///
    /// An empty key makes the operation the identity.
    pub fn new(key: impl AsRef<str>, tags: Arc<FieldTagRegistry>) -> Self {
        Self {
            key: key.as_ref().trim().to_string(),
            tags,
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
    pub fn key(&self) -> &str {
        &self.key
    }

    fn resolve_field(&self, record: &Record) -> OpResult<usize> {
        let ty = record.record_type();
        self.tags
            .lookup(ty, &self.key)
            .or_else(|| ty.position_by_name(&self.key))
            .ok_or_else(|| OpError::missing_key(&self.key, format!("record {ty}")))
    }

    fn entry_key(&self, map: &Mapping) -> OpResult<Key> {
        match map.key_type() {
            Type::Str | Type::Any => Ok(Key::Str(self.key.clone())),
            other => Err(OpError::missing_key(
                &self.key,
                format!("mapping with {other} keys"),
            )),
        }
    }

    /// Copy the entry, run the continuation on the copy, write it back
    fn access_entry(&self, map: &mut Mapping) -> OpResult<Value> {
        let key = self.entry_key(map)?;
        let mut slot = map
            .get(&key)
            .cloned()
            .ok_or_else(|| OpError::missing_key(&self.key, "mapping"))?;
        if self.then.is_empty() {
            return Ok(slot);
        }
        let result = self.then.apply(Handle::place(&mut slot))?.into_value();
        map.entries.insert(key, slot);
        Ok(result)
    }

    fn unsupported(&self, value: &Value) -> OpError {
        match value {
            Value::Seq(_) => OpError::unsupported_operation(format!(
                "cannot access field \"{}\" on a sequence",
                self.key
            )),
            Value::Optional(_) => OpError::missing_key(&self.key, "empty optional"),
            other => OpError::unsupported_operation(format!(
                "cannot access field \"{}\" on {}",
                self.key,
                other.type_of()
            )),
        }
    }
}

impl Op for Dot {
    fn apply<'a>(&self, input: Handle<'a>) -> OpResult<Handle<'a>> {
        if self.key.is_empty() {
            return self.then.apply(input);
        }

        match input.deref_optional() {
            Handle::Place(value) => match value {
                Value::Map(map) => self.access_entry(map).map(Handle::Detached),
                Value::Record(record) => {
                    let pos = self.resolve_field(record)?;
                    self.then.apply(Handle::Place(&mut record.fields[pos]))
                }
                other => Err(self.unsupported(other)),
            },
            Handle::Detached(value) => match value {
                Value::Map(mut map) => self.access_entry(&mut map).map(Handle::Detached),
                Value::Record(record) => {
                    let pos = self.resolve_field(&record)?;
                    let field = record.fields.into_iter().nth(pos).ok_or_else(|| {
                        OpError::missing_key(&self.key, format!("record {}", record.ty))
                    })?;
                    self.then.apply(Handle::Detached(field))
                }
                other => Err(self.unsupported(&other)),
            },
        }
    }
}
