//! Runtime type descriptors
//!
//! `Type` describes the shape a value slot accepts. Record types are
//! compared by identity: every `RecordType` built gets a fresh
//! `RecordTypeId`, so two record types never compare equal because they
//! share a name (anonymous records all have an empty name).

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Value;
use super::containers::{Mapping, Optional, Record, Sequence};

static NEXT_RECORD_TYPE_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a record type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordTypeId(u64);

impl RecordTypeId {
    fn next() -> Self {
        Self(NEXT_RECORD_TYPE_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[inline]
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Type of a value slot
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    /// Dynamically typed slot, accepts any value
    Any,
    Bool,
    Int,
    Float,
    Str,
    /// Sequence of the element type
    Seq(Box<Type>),
    /// Mapping from key type to value type
    Map(Box<Type>, Box<Type>),
    Record(Arc<RecordType>),
    /// Optional (pointer-like) wrapper around the inner type
    Optional(Box<Type>),
}

impl Type {
    #[must_use]
    pub fn seq(elem: Type) -> Self {
        Type::Seq(Box::new(elem))
    }

    #[must_use]
    pub fn map(key: Type, value: Type) -> Self {
        Type::Map(Box::new(key), Box::new(value))
    }

    #[must_use]
    pub fn optional(inner: Type) -> Self {
        Type::Optional(Box::new(inner))
    }

    #[must_use]
    pub fn record(ty: &Arc<RecordType>) -> Self {
        Type::Record(Arc::clone(ty))
    }

    /// Whether a value of type `other` may be stored in a slot of this type
    #[must_use]
    pub fn accepts(&self, other: &Type) -> bool {
        matches!(self, Type::Any) || self == other
    }

    /// Zero value of this type
    ///
    /// Sequences and mappings are empty, records hold the zero value of
    /// every field, optionals (and `Any`) are empty.
    #[must_use]
    pub fn zero(&self) -> Value {
        match self {
            Type::Any => Value::Optional(Optional::none(Type::Any)),
            Type::Bool => Value::Bool(false),
            Type::Int => Value::Int(0),
            Type::Float => Value::Float(0.0),
            Type::Str => Value::Str(String::new()),
            Type::Seq(elem) => Value::Seq(Sequence::empty((**elem).clone())),
            Type::Map(key, value) => {
                Value::Map(Mapping::empty((**key).clone(), (**value).clone()))
            }
            Type::Record(record) => Value::Record(Record::zero(record)),
            Type::Optional(inner) => Value::Optional(Optional::none((**inner).clone())),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Any => f.write_str("any"),
            Type::Bool => f.write_str("bool"),
            Type::Int => f.write_str("int"),
            Type::Float => f.write_str("float"),
            Type::Str => f.write_str("string"),
            Type::Seq(elem) => write!(f, "[]{elem}"),
            Type::Map(key, value) => write!(f, "map[{key}]{value}"),
            Type::Record(record) => fmt::Display::fmt(record, f),
            Type::Optional(inner) => write!(f, "?{inner}"),
        }
    }
}

/// Field declaration of a record type
#[derive(Debug, Clone)]
pub struct FieldDef {
    name: String,
    tag: Option<String>,
    ty: Type,
}

impl FieldDef {
    /// Language-level field name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw external-name annotation, e.g. `"slice,omitempty"`
    #[inline]
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// External name carried by the tag
    ///
    /// The first comma separated part of the tag, unless it is empty or `-`.
    #[must_use]
    pub fn external_name(&self) -> Option<&str> {
        let tag = self.tag.as_deref()?;
        let name = tag.split(',').next().unwrap_or_default();
        if name.is_empty() || name == "-" {
            None
        } else {
            Some(name)
        }
    }

    /// Whether the tag marks the field as skipped for serialization
    #[must_use]
    pub fn is_skipped(&self) -> bool {
        self.tag.as_deref() == Some("-")
    }

    #[inline]
    #[must_use]
    pub fn ty(&self) -> &Type {
        &self.ty
    }
}

/// Declared shape of a record: ordered, typed, optionally tagged fields
#[derive(Debug)]
pub struct RecordType {
    id: RecordTypeId,
    name: String,
    fields: Vec<FieldDef>,
}

impl RecordType {
    /// Start declaring a record type
    ///
    /// # Examples
    /// ```
    /// use jqpath_core::value::{RecordType, Type};
    ///
    /// let sub = RecordType::builder("Sub").field("S", Type::seq(Type::Str)).build();
    /// assert_eq!(sub.fields().len(), 1);
    /// ```
    pub fn builder(name: impl Into<String>) -> RecordTypeBuilder {
        RecordTypeBuilder {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> RecordTypeId {
        self.id
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    #[must_use]
    pub fn field(&self, position: usize) -> Option<&FieldDef> {
        self.fields.get(position)
    }

    /// Resolve a language-level field name
    ///
    /// Tries the exact name, then the capitalized form, then an ASCII
    /// case-insensitive match.
    #[must_use]
    pub fn position_by_name(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        if let Some(pos) = self.fields.iter().position(|f| f.name == name) {
            return Some(pos);
        }
        let capitalized = capitalize(name);
        if let Some(pos) = self.fields.iter().position(|f| f.name == capitalized) {
            return Some(pos);
        }
        self.fields
            .iter()
            .position(|f| f.name.eq_ignore_ascii_case(name))
    }
}

impl PartialEq for RecordType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "record#{}", self.id.0)
        } else {
            f.write_str(&self.name)
        }
    }
}

/// Builder for `RecordType`
#[derive(Debug)]
pub struct RecordTypeBuilder {
    name: String,
    fields: Vec<FieldDef>,
}

impl RecordTypeBuilder {
    /// Declare an untagged field
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, ty: Type) -> Self {
        self.fields.push(FieldDef {
            name: name.into(),
            tag: None,
            ty,
        });
        self
    }

    /// Declare a field carrying an external-name tag
    #[must_use]
    pub fn tagged(mut self, name: impl Into<String>, tag: impl Into<String>, ty: Type) -> Self {
        self.fields.push(FieldDef {
            name: name.into(),
            tag: Some(tag.into()),
            ty,
        });
        self
    }

    /// Finish the declaration, allocating a fresh type identity
    #[must_use]
    pub fn build(self) -> Arc<RecordType> {
        Arc::new(RecordType {
            id: RecordTypeId::next(),
            name: self.name,
            fields: self.fields,
        })
    }
}

/// Upper-case the first character, leaving the rest untouched
pub(crate) fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_first_char_only() {
        assert_eq!(capitalize("hello"), "Hello");
        assert_eq!(capitalize("hELLO"), "HELLO");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn anonymous_record_types_are_distinct() {
        let a = RecordType::builder("").field("X", Type::Int).build();
        let b = RecordType::builder("").field("X", Type::Int).build();
        assert_ne!(Type::record(&a), Type::record(&b));
        assert_eq!(Type::record(&a), Type::record(&a));
    }

    #[test]
    fn external_name_skips_options_and_dash() {
        let ty = RecordType::builder("T")
            .tagged("A", "a,omitempty", Type::Str)
            .tagged("B", ",omitempty", Type::Str)
            .tagged("C", "-", Type::Str)
            .build();
        assert_eq!(ty.fields()[0].external_name(), Some("a"));
        assert_eq!(ty.fields()[1].external_name(), None);
        assert_eq!(ty.fields()[2].external_name(), None);
        assert!(ty.fields()[2].is_skipped());
    }
}
