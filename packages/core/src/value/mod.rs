//! Typed in-memory value model
//!
//! Values are a closed set of variants; every primitive operation matches on
//! them instead of inspecting types at runtime. Each value knows its own
//! runtime [`Type`], which is what the mutating operations compare against.

mod containers;
mod handle;
mod serialize;
mod types;

use std::sync::Arc;

pub use containers::{Key, Mapping, Optional, Record, Sequence};
pub use handle::Handle;
pub use types::{FieldDef, RecordType, RecordTypeBuilder, RecordTypeId, Type};

/// Kind of the data a handle refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Mapping,
    Record,
    Sequence,
    Scalar,
    Optional,
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Kind::Mapping => "mapping",
            Kind::Record => "record",
            Kind::Sequence => "sequence",
            Kind::Scalar => "scalar",
            Kind::Optional => "optional",
        })
    }
}

/// A dynamically typed value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Seq(Sequence),
    Map(Mapping),
    Record(Record),
    Optional(Optional),
}

impl Value {
    /// Sequence value with the given element type
    ///
    /// Items are not checked against `elem`; use [`Sequence::new`] for a
    /// checked construction.
    pub fn seq<I, V>(elem: Type, items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Value::Seq(Sequence {
            elem,
            items: items.into_iter().map(Into::into).collect(),
        })
    }

    /// Zero-valued record of the given type
    #[must_use]
    pub fn record(ty: &Arc<RecordType>) -> Self {
        Value::Record(Record::zero(ty))
    }

    /// Empty optional of the given inner type
    #[must_use]
    pub fn none(ty: Type) -> Self {
        Value::Optional(Optional::none(ty))
    }

    /// Optional holding `value`
    #[must_use]
    pub fn some(value: impl Into<Value>) -> Self {
        Value::Optional(Optional::some(value.into()))
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Str(_) => Kind::Scalar,
            Value::Seq(_) => Kind::Sequence,
            Value::Map(_) => Kind::Mapping,
            Value::Record(_) => Kind::Record,
            Value::Optional(_) => Kind::Optional,
        }
    }

    /// Runtime type of this value
    #[must_use]
    pub fn type_of(&self) -> Type {
        match self {
            Value::Bool(_) => Type::Bool,
            Value::Int(_) => Type::Int,
            Value::Float(_) => Type::Float,
            Value::Str(_) => Type::Str,
            Value::Seq(seq) => Type::seq(seq.elem.clone()),
            Value::Map(map) => Type::map(map.key.clone(), map.value.clone()),
            Value::Record(record) => Type::Record(Arc::clone(&record.ty)),
            Value::Optional(opt) => Type::optional(opt.ty.clone()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_seq(&self) -> Option<&Sequence> {
        match self {
            Value::Seq(seq) => Some(seq),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_map(&self) -> Option<&Mapping> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }

    /// JSON rendering of this value
    ///
    /// Records use the external (tag) name of each field when present.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serialize::to_json(self)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<Sequence> for Value {
    fn from(value: Sequence) -> Self {
        Value::Seq(value)
    }
}

impl From<Mapping> for Value {
    fn from(value: Mapping) -> Self {
        Value::Map(value)
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Value::Record(value)
    }
}

impl From<Optional> for Value {
    fn from(value: Optional) -> Self {
        Value::Optional(value)
    }
}
