//! Ordered composition of operations

use std::sync::Arc;

use super::Op;
use crate::error::OpResult;
use crate::value::Handle;

/// Applies its operations in order, stopping at the first error
///
/// The error is returned unchanged and mutations made by earlier steps are
/// kept. An empty chain returns its input as is.
#[derive(Debug, Clone, Default)]
pub struct Chain {
    ops: Vec<Arc<dyn Op>>,
}

impl Chain {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Chain holding a single operation
    pub fn of(op: impl Op + 'static) -> Self {
        Self {
            ops: vec![Arc::new(op)],
        }
    }

    pub fn push(&mut self, op: impl Op + 'static) {
        self.ops.push(Arc::new(op));
    }

    /// Append an operation, builder style
    #[must_use]
    pub fn then(mut self, op: impl Op + 'static) -> Self {
        self.push(op);
        self
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Op>> {
        self.ops.iter()
    }
}

impl Op for Chain {
    fn apply<'a>(&self, input: Handle<'a>) -> OpResult<Handle<'a>> {
        let mut current = input;
        for (step, op) in self.ops.iter().enumerate() {
            log::trace!("chain step {step}: {op:?} on {} handle", current.kind());
            current = op.apply(current).inspect_err(|err| {
                log::trace!("chain stopped at step {step}: {err}");
            })?;
        }
        Ok(current)
    }
}

impl FromIterator<Arc<dyn Op>> for Chain {
    fn from_iter<I: IntoIterator<Item = Arc<dyn Op>>>(iter: I) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}
