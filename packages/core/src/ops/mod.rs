//! Composable operations over value handles
//!
//! An [`Op`] turns one handle into another or fails. The primitives are
//! [`Dot`] (field access), [`Index`], [`Range`], [`Set`] and [`Addition`];
//! [`Chain`] composes operations left to right. Every primitive also carries
//! an optional continuation, run on the handle it resolves.

mod addition;
mod chain;
mod dot;
mod index;
mod range;
mod set;

use std::fmt;

pub use addition::Addition;
pub use chain::Chain;
pub use dot::Dot;
pub use index::Index;
pub use range::Range;
pub use set::Set;

use crate::error::OpResult;
use crate::value::{Handle, Value};

/// A single transformation of a value handle
pub trait Op: fmt::Debug + Send + Sync {
    /// Apply the operation
    ///
    /// Returns the resulting handle, or the error that stopped it. Settable
    /// input handles may be mutated in place.
    fn apply<'a>(&self, input: Handle<'a>) -> OpResult<Handle<'a>>;
}

/// Convenience entry points for applying an operation to a root value
pub trait OpExt: Op {
    /// Apply to a settable root and return an owned copy of the result
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the operation.
    fn apply_to(&self, root: &mut Value) -> OpResult<Value> {
        self.apply(Handle::place(root)).map(Handle::into_value)
    }

    /// Apply to a detached copy of `root`, leaving it untouched
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the operation. Mutating operations
    /// fail with `NotSettable`.
    fn read(&self, root: &Value) -> OpResult<Value> {
        self.apply(Handle::detached(root.clone()))
            .map(Handle::into_value)
    }
}

impl<T: Op + ?Sized> OpExt for T {}

/// Closure wrapper implementing [`Op`]
pub struct FnOp<F> {
    name: &'static str,
    f: F,
}

impl<F> FnOp<F>
where
    F: for<'a> Fn(Handle<'a>) -> OpResult<Handle<'a>> + Send + Sync,
{
    pub fn new(name: &'static str, f: F) -> Self {
        Self { name, f }
    }
}

impl<F> fmt::Debug for FnOp<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnOp").field("name", &self.name).finish()
    }
}

impl<F> Op for FnOp<F>
where
    F: for<'a> Fn(Handle<'a>) -> OpResult<Handle<'a>> + Send + Sync,
{
    fn apply<'a>(&self, input: Handle<'a>) -> OpResult<Handle<'a>> {
        (self.f)(input)
    }
}
