//! Operation error types
//!
//! Core error types shared by operations, chains and the path compiler.

use std::fmt;

/// Category of an operation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed operation parameters, detected at construction time
    InvalidArgument,
    /// A named field or key does not exist on the target
    KeyNotFound,
    /// Index or range exceeds the target's length
    OutOfBounds,
    /// The operation is not defined for the target's kind
    UnsupportedOperation,
    /// A mutating operation's target is not addressable
    NotSettable,
    /// Supplied value type is incompatible with the target type
    TypeMismatch,
    /// Merge target kind cannot receive values
    UnsupportedType,
    /// Raw payload could not be decoded into the target type
    DecodeError,
    /// Path expression is syntactically invalid
    ParseError,
}

impl ErrorKind {
    /// Short human readable label
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "invalid argument",
            ErrorKind::KeyNotFound => "key not found",
            ErrorKind::OutOfBounds => "out of bounds",
            ErrorKind::UnsupportedOperation => "unsupported operation",
            ErrorKind::NotSettable => "not settable",
            ErrorKind::TypeMismatch => "type mismatch",
            ErrorKind::UnsupportedType => "unsupported type",
            ErrorKind::DecodeError => "decode error",
            ErrorKind::ParseError => "parse error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by operations, chains, decoders and the path compiler
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct OpError {
    pub kind: ErrorKind,
    pub message: String,
}

/// Result type for path operations
pub type OpResult<T> = Result<T, OpError>;

impl OpError {
    #[must_use]
    pub fn new(kind: ErrorKind, message: String) -> Self {
        Self { kind, message }
    }

    /// The error category
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Detail message without the kind prefix
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check the error category
    #[inline]
    #[must_use]
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, msg.into())
    }

    pub fn key_not_found(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::KeyNotFound, msg.into())
    }

    pub fn out_of_bounds(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::OutOfBounds, msg.into())
    }

    pub fn unsupported_operation(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedOperation, msg.into())
    }

    pub fn not_settable(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotSettable, msg.into())
    }

    pub fn type_mismatch(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::TypeMismatch, msg.into())
    }

    pub fn unsupported_type(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedType, msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::DecodeError, msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::ParseError, msg.into())
    }
}
