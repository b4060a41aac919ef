//! Value handles
//!
//! A handle either borrows a live location inside the root (`Place`,
//! settable) or owns a detached copy (`Detached`, not settable). Mutating
//! operations check settability explicitly instead of probing for it.

use super::containers::Optional;
use super::{Kind, Type, Value};

/// Reference to a location in a data graph, or a detached copy of one
#[derive(Debug)]
pub enum Handle<'a> {
    /// Live, settable location
    Place(&'a mut Value),
    /// Detached copy; mutations through it never reach the root
    Detached(Value),
}

impl<'a> Handle<'a> {
    #[inline]
    pub fn place(value: &'a mut Value) -> Self {
        Handle::Place(value)
    }

    #[inline]
    #[must_use]
    pub fn detached(value: Value) -> Self {
        Handle::Detached(value)
    }

    #[inline]
    #[must_use]
    pub fn is_settable(&self) -> bool {
        matches!(self, Handle::Place(_))
    }

    #[must_use]
    pub fn value(&self) -> &Value {
        match self {
            Handle::Place(value) => value,
            Handle::Detached(value) => value,
        }
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.value().kind()
    }

    /// Owned value behind the handle; places are cloned
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Handle::Place(value) => value.clone(),
            Handle::Detached(value) => value,
        }
    }

    /// Strip every optional wrapper that holds a value
    #[must_use]
    pub fn deref_optional(self) -> Self {
        match self {
            Handle::Place(value) => Handle::Place(deref_place(value)),
            Handle::Detached(value) => Handle::Detached(deref_owned(value)),
        }
    }

    /// Like [`Handle::deref_optional`], but empty optionals behind a place
    /// are filled with the zero value of their inner type first.
    #[must_use]
    pub(crate) fn deref_optional_alloc(self) -> Self {
        match self {
            Handle::Place(value) => Handle::Place(alloc_place(value)),
            Handle::Detached(value) => Handle::Detached(deref_owned(value)),
        }
    }
}

fn deref_place(value: &mut Value) -> &mut Value {
    match value {
        Value::Optional(Optional {
            value: Some(inner), ..
        }) => deref_place(inner),
        other => other,
    }
}

fn deref_owned(value: Value) -> Value {
    match value {
        Value::Optional(Optional {
            value: Some(inner), ..
        }) => deref_owned(*inner),
        other => other,
    }
}

fn alloc_place(value: &mut Value) -> &mut Value {
    let fill = matches!(
        value,
        Value::Optional(Optional { ty, value: slot })
            if slot.is_some() || !matches!(ty, Type::Any)
    );
    if !fill {
        return value;
    }
    match value {
        Value::Optional(Optional { ty, value: slot }) => {
            let inner = slot.get_or_insert_with(|| Box::new(ty.zero()));
            alloc_place(inner)
        }
        other => other,
    }
}
