//! Lowering of parsed paths to operation chains

use super::ast::{AssignOp, PathExpression, PathSegment};
use super::parser::SegmentParser;
use super::tokenizer::Tokenizer;
use crate::decode::Payload;
use crate::engine::PathEngine;
use crate::error::{OpResult, invalid_expression_error};
use crate::ops::Chain;

/// Compiles path expressions with the collaborators of one engine
///
/// Segments are folded right to left: each segment's operation receives the
/// rest of the path as its continuation. A mapping entry reached through
/// `Dot` is therefore written back after the rest of the path has run on it.
#[derive(Debug, Clone)]
pub struct PathCompiler {
    engine: PathEngine,
}

impl PathCompiler {
    #[must_use]
    pub fn new(engine: PathEngine) -> Self {
        Self { engine }
    }

    /// Tokenize and parse `expression`, enforcing the configured limits
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` describing the first problem found.
    pub fn parse(&self, expression: &str) -> OpResult<PathExpression> {
        let config = self.engine.config();
        if expression.len() > config.max_path_len {
            return Err(invalid_expression_error(
                &truncated(expression),
                format!("path longer than {} bytes", config.max_path_len),
                None,
            ));
        }
        let tokens = Tokenizer::new(expression).tokenize()?;
        SegmentParser::new(expression, tokens, config.max_segments).parse()
    }

    /// Compile a path without an assignment
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` for malformed paths and for paths ending in
    /// `= %v` or `+= %v`, which need a bound value.
    pub fn compile(&self, expression: &str) -> OpResult<Chain> {
        self.build(expression, None)
    }

    /// Compile a path ending in `= %v` or `+= %v`, binding `payload` to `%v`
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` for malformed paths and for paths without an
    /// assignment.
    pub fn compile_with(&self, expression: &str, payload: impl Into<Payload>) -> OpResult<Chain> {
        self.build(expression, Some(payload.into()))
    }

    fn build(&self, expression: &str, payload: Option<Payload>) -> OpResult<Chain> {
        let parsed = self.parse(expression)?;
        let mut tail = match (parsed.assignment, payload) {
            (Some(AssignOp::Set), Some(payload)) => Chain::of(self.engine.set(payload)),
            (Some(AssignOp::Merge), Some(payload)) => Chain::of(self.engine.addition(payload)),
            (Some(_), None) => {
                return Err(invalid_expression_error(
                    expression,
                    "no value bound to '%v'",
                    None,
                ));
            }
            (None, Some(_)) => {
                return Err(invalid_expression_error(
                    expression,
                    "a value was supplied but the path has no assignment",
                    None,
                ));
            }
            (None, None) => Chain::new(),
        };

        for segment in parsed.segments.iter().rev() {
            tail = self.lower(segment, tail)?;
        }
        log::debug!("compiled path {parsed} into {} top-level ops", tail.len());
        Ok(tail)
    }

    fn lower(&self, segment: &PathSegment, then: Chain) -> OpResult<Chain> {
        Ok(match segment {
            PathSegment::Field(name) => Chain::of(self.engine.dot(name).with_continuation(then)),
            PathSegment::Index(index) => {
                Chain::of(self.engine.index(*index)?.with_continuation(then))
            }
            PathSegment::Range { from, to } => {
                Chain::of(self.engine.range(*from, *to)?.with_continuation(then))
            }
        })
    }
}

fn truncated(expression: &str) -> String {
    const SHOWN: usize = 32;
    match expression.char_indices().nth(SHOWN) {
        Some((cut, _)) => format!("{}...", &expression[..cut]),
        None => expression.to_string(),
    }
}
