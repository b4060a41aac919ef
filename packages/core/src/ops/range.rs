//! Inclusive range access into sequences and strings

use super::{Chain, Op};
use crate::error::{OpError, OpResult};
use crate::value::{Handle, Sequence, Value};

/// Copy the elements `[from, to]` (both inclusive) of a sequence or string
///
/// The source is never modified; the continuation runs on the detached copy.
#[derive(Debug, Clone)]
pub struct Range {
    from: usize,
    to: usize,
    then: Chain,
}

impl Range {
    /// Range access over `[from, to]`
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when `from` is negative or greater than `to`.
    pub fn new(from: i64, to: i64) -> OpResult<Self> {
        if from < 0 {
            return Err(OpError::invalid_argument(format!(
                "range start needs to be greater than or equal to 0, got {from}"
            )));
        }
        if from > to {
            return Err(OpError::invalid_argument(format!(
                "range start {from} needs to be less than or equal to end {to}"
            )));
        }
        let from = usize::try_from(from)
            .map_err(|_| OpError::invalid_argument(format!("range start {from} too large")))?;
        let to = usize::try_from(to)
            .map_err(|_| OpError::invalid_argument(format!("range end {to} too large")))?;
        Ok(Self {
            from,
            to,
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
    pub fn bounds(&self) -> (usize, usize) {
        (self.from, self.to)
    }

    fn slice(&self, value: &Value) -> OpResult<Value> {
        match value {
            Value::Seq(seq) => {
                if self.to >= seq.len() {
                    return Err(OpError::index_out_of_bounds(self.to, seq.len()));
                }
                Ok(Value::Seq(Sequence {
                    elem: seq.elem.clone(),
                    items: seq.items[self.from..=self.to].to_vec(),
                }))
            }
            Value::Str(text) => {
                let len = text.chars().count();
                if self.to >= len {
                    return Err(OpError::index_out_of_bounds(self.to, len));
                }
                Ok(Value::Str(
                    text.chars()
                        .skip(self.from)
                        .take(self.to - self.from + 1)
                        .collect(),
                ))
            }
            other => Err(OpError::unsupported_operation(format!(
                "cannot take a range of {}, not a sequence or a string",
                other.type_of()
            ))),
        }
    }
}

impl Op for Range {
    fn apply<'a>(&self, input: Handle<'a>) -> OpResult<Handle<'a>> {
        let input = input.deref_optional();
        let sliced = self.slice(input.value())?;
        self.then.apply(Handle::Detached(sliced))
    }
}
