//! Operation error handling module
//!
//! Error kinds, the `OpError` type and the helpers used by every operation,
//! the decoder and the path compiler.

pub mod constructors;
mod conversions;
mod types;

pub use constructors::{invalid_expression_error, type_mismatch_error};
pub use types::{ErrorKind, OpError, OpResult};
