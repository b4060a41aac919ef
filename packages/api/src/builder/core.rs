//! Core `PathBuilder` structure and state markers

use jqpath_core::PathEngine;
use jqpath_core::decode::Payload;

/// State marker: no value bound to `%v`
#[derive(Debug, Clone, Copy)]
pub struct Unbound;

/// State marker: a value is bound to `%v`
#[derive(Debug, Clone)]
pub struct Bound {
    pub(crate) payload: Payload,
}

/// Builder for one path expression
///
/// Type parameter `S` tracks the value state:
/// - `Unbound`: read-only paths; `value` / `json` bind the placeholder
/// - `Bound`: paths ending in `= %v` or `+= %v`
#[derive(Debug, Clone)]
pub struct PathBuilder<S = Unbound> {
    pub(crate) engine: PathEngine,
    pub(crate) expression: String,
    pub(crate) state: S,
    pub(crate) debug_enabled: bool,
}

impl PathBuilder<Unbound> {
    /// Start a builder for `expression` on a shared engine
    #[must_use]
    pub fn new(engine: &PathEngine, expression: impl Into<String>) -> Self {
        Self {
            engine: engine.clone(),
            expression: expression.into(),
            state: Unbound,
            debug_enabled: false,
        }
    }
}

impl<S> PathBuilder<S> {
    /// Log compilation and application at debug level
    #[must_use]
    pub fn debug(mut self) -> Self {
        self.debug_enabled = true;
        self
    }

    #[inline]
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    #[inline]
    #[must_use]
    pub fn engine(&self) -> &PathEngine {
        &self.engine
    }
}
