//! Value assignment

use std::sync::Arc;

use super::{Chain, Op};
use crate::decode::{Decoder, Payload};
use crate::error::{OpError, OpResult, type_mismatch_error};
use crate::value::Handle;

/// Replace the target with the payload
///
/// Raw JSON payloads are decoded into the target's type; typed payloads
/// must have exactly the target's type. The continuation runs on the
/// updated target.
#[derive(Debug, Clone)]
pub struct Set {
    payload: Payload,
    decoder: Arc<dyn Decoder>,
    then: Chain,
}

impl Set {
    pub fn new(payload: impl Into<Payload>, decoder: Arc<dyn Decoder>) -> Self {
        Self {
            payload: payload.into(),
            decoder,
            then: Chain::new(),
        }
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
    pub fn payload(&self) -> &Payload {
        &self.payload
    }
}

impl Op for Set {
    fn apply<'a>(&self, input: Handle<'a>) -> OpResult<Handle<'a>> {
        let input = if self.payload.is_optional() {
            input
        } else {
            input.deref_optional_alloc()
        };

        let Handle::Place(target) = input else {
            return Err(OpError::not_settable(
                "cannot assign to a detached value",
            ));
        };

        let target_ty = target.type_of();
        let value = match &self.payload {
            Payload::Json(raw) => self.decoder.decode(raw, &target_ty)?,
            Payload::Value(value) => {
                let supplied = value.type_of();
                if supplied != target_ty {
                    return Err(type_mismatch_error("set", supplied, target_ty));
                }
                value.clone()
            }
        };

        *target = value;
        self.then.apply(Handle::Place(target))
    }
}
