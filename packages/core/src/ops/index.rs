//! Indexed access into sequences

use super::{Chain, Op};
use crate::error::{OpError, OpResult};
use crate::value::{Handle, Value};

/// Access one element of a sequence
#[derive(Debug, Clone)]
pub struct Index {
    index: usize,
    then: Chain,
}

impl Index {
    /// Element access at `index`
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a negative index.
    pub fn new(index: i64) -> OpResult<Self> {
        let index = usize::try_from(index).map_err(|_| {
            OpError::invalid_argument(format!(
                "index needs to be greater than or equal to 0, got {index}"
            ))
        })?;
        Ok(Self {
            index,
            then: Chain::new(),
        })
    }

    /// Append an operation to the continuation
    #[must_use]
    pub fn then(mut self, op: impl Op + 'static) -> Self {
        self.then.push(op);
        self
    }

    /// Replace the continuation
    #[must_use]
    pub fn with_continuation(mut self, then: Chain) -> Self {
        self.then = then;
        self
    }

    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    fn unsupported(value: &Value) -> OpError {
        OpError::unsupported_operation(format!(
            "cannot index into {}, not a sequence",
            value.type_of()
        ))
    }
}

impl Op for Index {
    fn apply<'a>(&self, input: Handle<'a>) -> OpResult<Handle<'a>> {
        match input.deref_optional() {
            Handle::Place(Value::Seq(seq)) => {
                let len = seq.len();
                let element = seq
                    .items
                    .get_mut(self.index)
                    .ok_or_else(|| OpError::index_out_of_bounds(self.index, len))?;
                self.then.apply(Handle::Place(element))
            }
            Handle::Detached(Value::Seq(seq)) => {
                let len = seq.len();
                let element = seq
                    .items
                    .into_iter()
                    .nth(self.index)
                    .ok_or_else(|| OpError::index_out_of_bounds(self.index, len))?;
                self.then.apply(Handle::Detached(element))
            }
            Handle::Place(other) => Err(Self::unsupported(other)),
            Handle::Detached(other) => Err(Self::unsupported(&other)),
        }
    }
}
