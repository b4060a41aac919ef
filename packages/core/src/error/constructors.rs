//! Error constructor functions
//!
//! Factory methods that attach path, type and position context to errors.

use super::types::{ErrorKind, OpError};

impl OpError {
    /// Creates an invalid path expression error
    ///
    /// # Arguments
    /// * `expression` - The invalid path expression
    /// * `reason` - Specific reason why the expression is invalid
    /// * `position` - Optional character position where the error occurred
    ///
    /// # Examples
    /// ```
    /// use jqpath_core::error::{ErrorKind, OpError};
    ///
    /// let error = OpError::invalid_expression(".Def.[1:", "unterminated range", Some(8));
    /// assert_eq!(error.kind(), ErrorKind::ParseError);
    /// ```
    pub fn invalid_expression(
        expression: impl Into<String>,
        reason: impl Into<String>,
        position: Option<usize>,
    ) -> Self {
        let expression = expression.into();
        let reason = reason.into();
        let message = match position {
            Some(pos) => format!("invalid path '{expression}': {reason} at position {pos}"),
            None => format!("invalid path '{expression}': {reason}"),
        };
        OpError::parse(message)
    }

    /// Creates an error for a field or key missing on the target
    pub fn missing_key(key: &str, target: impl Into<String>) -> Self {
        OpError::key_not_found(format!("key \"{key}\" not found in {}", target.into()))
    }

    /// Creates an error for an index or range end past the target length
    #[must_use]
    pub fn index_out_of_bounds(index: usize, len: usize) -> Self {
        OpError::out_of_bounds(format!("index {index} out of bounds for length {len}"))
    }

    /// Creates a type mismatch error between the supplied and target types
    pub fn mismatched_types(
        context: &str,
        supplied: impl std::fmt::Display,
        target: impl std::fmt::Display,
    ) -> Self {
        OpError::new(
            ErrorKind::TypeMismatch,
            format!("{context}: cannot use value of type {supplied} as {target}"),
        )
    }
}

/// Creates an invalid path expression error
pub fn invalid_expression_error(
    expression: &str,
    reason: impl Into<String>,
    position: Option<usize>,
) -> OpError {
    OpError::invalid_expression(expression, reason, position)
}

/// Creates a type mismatch error
pub fn type_mismatch_error(
    context: &str,
    supplied: impl std::fmt::Display,
    target: impl std::fmt::Display,
) -> OpError {
    OpError::mismatched_types(context, supplied, target)
}
