//! Container values: sequences, mappings, records and optionals

use std::fmt;
use std::sync::Arc;

use hashbrown::HashMap;

use super::Value;
use super::types::{RecordType, Type};
use crate::error::{OpError, OpResult, type_mismatch_error};

/// Mapping key
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl Key {
    #[must_use]
    pub fn type_of(&self) -> Type {
        match self {
            Key::Bool(_) => Type::Bool,
            Key::Int(_) => Type::Int,
            Key::Str(_) => Type::Str,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Bool(b) => write!(f, "{b}"),
            Key::Int(i) => write!(f, "{i}"),
            Key::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Str(value.to_string())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::Str(value)
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Int(value)
    }
}

impl From<bool> for Key {
    fn from(value: bool) -> Self {
        Key::Bool(value)
    }
}

/// Typed sequence of values
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    pub(crate) elem: Type,
    pub(crate) items: Vec<Value>,
}

impl Sequence {
    #[must_use]
    pub fn empty(elem: Type) -> Self {
        Self {
            elem,
            items: Vec::new(),
        }
    }

    /// Build a sequence, checking every item against the element type
    ///
    /// # Errors
    ///
    /// Returns a `TypeMismatch` error for the first item the element type
    /// does not accept.
    pub fn new(elem: Type, items: Vec<Value>) -> OpResult<Self> {
        if let Some(bad) = items.iter().find(|v| !elem.accepts(&v.type_of())) {
            return Err(type_mismatch_error(
                "sequence element",
                bad.type_of(),
                &elem,
            ));
        }
        Ok(Self { elem, items })
    }

    #[inline]
    #[must_use]
    pub fn elem_type(&self) -> &Type {
        &self.elem
    }

    #[inline]
    #[must_use]
    pub fn items(&self) -> &[Value] {
        &self.items
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    #[must_use]
    pub fn into_items(self) -> Vec<Value> {
        self.items
    }
}

/// Typed mapping from keys to values
#[derive(Debug, Clone, PartialEq)]
pub struct Mapping {
    pub(crate) key: Type,
    pub(crate) value: Type,
    pub(crate) entries: HashMap<Key, Value>,
}

impl Mapping {
    #[must_use]
    pub fn empty(key: Type, value: Type) -> Self {
        Self {
            key,
            value,
            entries: HashMap::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn key_type(&self) -> &Type {
        &self.key
    }

    #[inline]
    #[must_use]
    pub fn value_type(&self) -> &Type {
        &self.value
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.entries.iter()
    }

    /// Entries sorted by key
    #[must_use]
    pub fn sorted_entries(&self) -> Vec<(&Key, &Value)> {
        let mut entries: Vec<_> = self.entries.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Insert an entry, checking key and value types
    ///
    /// # Errors
    ///
    /// Returns a `TypeMismatch` error when the key or value type is not
    /// accepted by the mapping.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> OpResult<Option<Value>> {
        let key = key.into();
        let value = value.into();
        self.check_entry(&key, &value)?;
        Ok(self.entries.insert(key, value))
    }

    /// Builder-style `insert`
    ///
    /// # Errors
    ///
    /// Same as [`Mapping::insert`].
    pub fn with(mut self, key: impl Into<Key>, value: impl Into<Value>) -> OpResult<Self> {
        self.insert(key, value)?;
        Ok(self)
    }

    pub(crate) fn check_entry(&self, key: &Key, value: &Value) -> OpResult<()> {
        if !self.key.accepts(&key.type_of()) {
            return Err(type_mismatch_error("mapping key", key.type_of(), &self.key));
        }
        if !self.value.accepts(&value.type_of()) {
            return Err(type_mismatch_error(
                "mapping value",
                value.type_of(),
                &self.value,
            ));
        }
        Ok(())
    }
}

/// Instance of a record type
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub(crate) ty: Arc<RecordType>,
    pub(crate) fields: Vec<Value>,
}

impl Record {
    /// Record holding the zero value of every field
    #[must_use]
    pub fn zero(ty: &Arc<RecordType>) -> Self {
        Self {
            ty: Arc::clone(ty),
            fields: ty.fields().iter().map(|f| f.ty().zero()).collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn record_type(&self) -> &Arc<RecordType> {
        &self.ty
    }

    #[inline]
    #[must_use]
    pub fn fields(&self) -> &[Value] {
        &self.fields
    }

    /// Field value by language-level name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.ty
            .position_by_name(name)
            .and_then(|pos| self.fields.get(pos))
    }

    /// Assign a field by language-level name, checking its type
    ///
    /// # Errors
    ///
    /// `KeyNotFound` when no field matches, `TypeMismatch` when the value
    /// type differs from the declared field type.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> OpResult<()> {
        let value = value.into();
        let pos = self
            .ty
            .position_by_name(name)
            .ok_or_else(|| OpError::missing_key(name, format!("record {}", self.ty)))?;
        let declared = self.ty.fields()[pos].ty();
        if !declared.accepts(&value.type_of()) {
            return Err(type_mismatch_error(
                &format!("field {name}"),
                value.type_of(),
                declared,
            ));
        }
        self.fields[pos] = value;
        Ok(())
    }

    /// Builder-style `set`
    ///
    /// # Errors
    ///
    /// Same as [`Record::set`].
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> OpResult<Self> {
        self.set(name, value)?;
        Ok(self)
    }
}

/// Optional (pointer-like) wrapper
#[derive(Debug, Clone, PartialEq)]
pub struct Optional {
    pub(crate) ty: Type,
    pub(crate) value: Option<Box<Value>>,
}

impl Optional {
    #[must_use]
    pub fn none(ty: Type) -> Self {
        Self { ty, value: None }
    }

    /// Wrap a value; the inner type is the value's own type
    #[must_use]
    pub fn some(value: Value) -> Self {
        Self {
            ty: value.type_of(),
            value: Some(Box::new(value)),
        }
    }

    #[inline]
    #[must_use]
    pub fn inner_type(&self) -> &Type {
        &self.ty
    }

    #[must_use]
    pub fn get(&self) -> Option<&Value> {
        self.value.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.value.is_none()
    }
}
