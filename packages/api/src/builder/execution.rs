//! Terminal methods: compile, apply, read

use jqpath_core::OpResult;
use jqpath_core::ops::{Chain, OpExt};
use jqpath_core::value::Value;

use crate::builder::core::{Bound, PathBuilder, Unbound};

impl PathBuilder<Unbound> {
    /// Compile the read-only path
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` for malformed paths or a dangling `%v`.
    pub fn compile(&self) -> OpResult<Chain> {
        self.log_compile();
        self.engine.compile(&self.expression)
    }

    /// Evaluate the path on a detached copy of `root`
    ///
    /// # Errors
    ///
    /// Returns the parse error, or the first error raised while evaluating.
    pub fn read(&self, root: &Value) -> OpResult<Value> {
        self.compile()?.read(root)
    }

    /// Evaluate the path on `root` in place
    ///
    /// # Errors
    ///
    /// Returns the parse error, or the first error raised while evaluating.
    pub fn apply(&self, root: &mut Value) -> OpResult<Value> {
        self.compile()?.apply_to(root)
    }
}

impl PathBuilder<Bound> {
    /// Compile the path with the bound value
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` for malformed paths or paths without an
    /// assignment.
    pub fn compile(&self) -> OpResult<Chain> {
        self.log_compile();
        self.engine
            .compile_with(&self.expression, self.state.payload.clone())
    }

    /// Assign or merge the bound value into `root`
    ///
    /// # Errors
    ///
    /// Returns the parse error, or the first error raised while applying.
    pub fn apply(&self, root: &mut Value) -> OpResult<Value> {
        let result = self.compile()?.apply_to(root);
        if self.debug_enabled {
            match &result {
                Ok(_) => log::debug!("applied {}", self.expression),
                Err(e) => log::debug!("failed to apply {}: {e}", self.expression),
            }
        }
        result
    }
}

impl<S> PathBuilder<S> {
    fn log_compile(&self) {
        if self.debug_enabled {
            log::debug!("compiling {}", self.expression);
        }
    }
}
