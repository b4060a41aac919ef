//! jqpath public API
//!
//! Compact path expressions over typed values, with a fluent builder:
//!
//! ```
//! use jqpath::Jq;
//! use jqpath_core::value::{Type, Value};
//!
//! let root = Value::seq(Type::Str, ["a", "b", "c", "d"]);
//! let picked = Jq::path(".[1:2]").read(&root).unwrap();
//! assert_eq!(picked.to_json(), serde_json::json!(["b", "c"]));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

pub use builder::core::{Bound, PathBuilder, Unbound};

pub use jqpath_core::decode::Payload;
pub use jqpath_core::ops::{Chain, Op, OpExt};
pub use jqpath_core::value::{Type, Value};
pub use jqpath_core::{ErrorKind, OpError, OpResult, PathEngine};

/// Main entry point providing static builder methods
pub struct Jq;

impl Jq {
    /// Builder for `expression` on a default engine
    #[must_use]
    pub fn path(expression: impl Into<String>) -> PathBuilder {
        PathBuilder::new(&PathEngine::default(), expression)
    }

    /// Builder for `expression` sharing `engine`'s registry and settings
    #[must_use]
    pub fn with_engine(engine: &PathEngine, expression: impl Into<String>) -> PathBuilder {
        PathBuilder::new(engine, expression)
    }
}

/// Shorthand for [`Jq::path`]
#[must_use]
pub fn path(expression: impl Into<String>) -> PathBuilder {
    Jq::path(expression)
}
