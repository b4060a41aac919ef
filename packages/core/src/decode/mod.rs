//! Decoder collaborator
//!
//! Mutating operations accept either a typed [`Value`] or a raw JSON payload.
//! Raw payloads are decoded into the target's type by a [`Decoder`] at the
//! moment the operation runs, since only then is the target type known.

mod json;

use std::fmt;

pub use json::JsonDecoder;

use crate::error::OpResult;
use crate::value::{Type, Value};

/// Decodes raw payloads into typed values
pub trait Decoder: fmt::Debug + Send + Sync {
    /// Decode `raw` into a value of type `ty`
    ///
    /// # Errors
    ///
    /// Returns a `DecodeError` when the payload does not fit `ty`, including
    /// members that have no matching record field.
    fn decode(&self, raw: &serde_json::Value, ty: &Type) -> OpResult<Value>;
}

/// Value supplied to `Set` and `Addition`
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Already typed value, must match the target type
    Value(Value),
    /// Raw JSON, decoded into the target type on application
    Json(serde_json::Value),
}

impl Payload {
    /// Parse a raw JSON payload
    ///
    /// # Errors
    ///
    /// Returns a `DecodeError` when `raw` is not valid JSON.
    pub fn json_str(raw: &str) -> OpResult<Self> {
        Ok(Payload::Json(serde_json::from_str(raw)?))
    }

    #[must_use]
    pub fn is_raw(&self) -> bool {
        matches!(self, Payload::Json(_))
    }

    /// Whether the payload is a typed optional value
    #[must_use]
    pub fn is_optional(&self) -> bool {
        matches!(self, Payload::Value(Value::Optional(_)))
    }

    /// Typed value of the payload, decoding raw JSON into `ty`
    pub(crate) fn resolve(&self, decoder: &dyn Decoder, ty: &Type) -> OpResult<Value> {
        match self {
            Payload::Value(value) => Ok(value.clone()),
            Payload::Json(raw) => decoder.decode(raw, ty),
        }
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Payload::Value(value)
    }
}

impl From<serde_json::Value> for Payload {
    fn from(raw: serde_json::Value) -> Self {
        Payload::Json(raw)
    }
}

macro_rules! payload_from_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Payload {
                fn from(value: $ty) -> Self {
                    Payload::Value(Value::from(value))
                }
            }
        )*
    };
}

payload_from_value!(
    bool,
    i64,
    i32,
    f64,
    &str,
    String,
    crate::value::Sequence,
    crate::value::Mapping,
    crate::value::Record,
    crate::value::Optional,
);
