//! Binding the `%v` placeholder

use jqpath_core::OpResult;
use jqpath_core::decode::Payload;

use crate::builder::core::{Bound, PathBuilder, Unbound};

impl PathBuilder<Unbound> {
    /// Bind a typed value
    ///
    /// # Examples
    /// ```
    /// use jqpath::Jq;
    /// use jqpath_core::value::{Mapping, Type, Value};
    ///
    /// let mut root = Value::from(Mapping::empty(Type::Str, Type::Int));
    /// Jq::path(". += %v")
    ///     .value(Mapping::empty(Type::Str, Type::Int).with("n", 1).unwrap())
    ///     .apply(&mut root)
    ///     .unwrap();
    /// assert_eq!(root.to_json(), serde_json::json!({ "n": 1 }));
    /// ```
    #[must_use]
    pub fn value(self, value: impl Into<Payload>) -> PathBuilder<Bound> {
        self.bind(value.into())
    }

    /// Bind raw JSON, decoded into the target's type when applied
    #[must_use]
    pub fn json(self, raw: serde_json::Value) -> PathBuilder<Bound> {
        self.bind(Payload::Json(raw))
    }

    /// Bind raw JSON text
    ///
    /// # Errors
    ///
    /// Returns a `DecodeError` when `raw` is not valid JSON.
    pub fn json_str(self, raw: &str) -> OpResult<PathBuilder<Bound>> {
        Ok(self.bind(Payload::json_str(raw)?))
    }

    fn bind(self, payload: Payload) -> PathBuilder<Bound> {
        PathBuilder {
            engine: self.engine,
            expression: self.expression,
            state: Bound { payload },
            debug_enabled: self.debug_enabled,
        }
    }
}

impl PathBuilder<Bound> {
    #[inline]
    #[must_use]
    pub fn payload(&self) -> &Payload {
        &self.state.payload
    }
}
