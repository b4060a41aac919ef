//! Segment parser
//!
//! ```text
//! path       := '.' [segment] { ('.' segment) | bracket } [assignment] EOF
//! segment    := name | bracket
//! bracket    := '[' INT ']' | '[' INT ':' INT ']'
//! assignment := ('=' | '+=') '%v'
//! ```

use std::collections::VecDeque;

use super::ast::{AssignOp, PathExpression, PathSegment};
use super::tokens::{Spanned, Token};
use crate::error::{OpError, OpResult, invalid_expression_error};

static EOF: Token = Token::Eof;

/// Parses a token stream into a [`PathExpression`]
pub struct SegmentParser<'a> {
    input: &'a str,
    tokens: VecDeque<Spanned>,
    max_segments: usize,
    last_position: usize,
}

impl<'a> SegmentParser<'a> {
    pub fn new(input: &'a str, tokens: VecDeque<Spanned>, max_segments: usize) -> Self {
        Self {
            input,
            tokens,
            max_segments,
            last_position: 0,
        }
    }

    pub fn parse(mut self) -> OpResult<PathExpression> {
        match self.next() {
            Token::Dot => {}
            Token::Eof => return Err(self.error("empty path")),
            other => {
                return Err(self.error(&format!("path must start with '.', found {other}")));
            }
        }

        let mut segments = Vec::new();
        match self.peek() {
            Token::Identifier(_) | Token::LeftBracket => segments.push(self.segment()?),
            Token::Dot => return Err(self.error("empty segment")),
            _ => {}
        }

        let assignment = loop {
            match self.peek() {
                Token::Dot => {
                    self.next();
                    match self.peek() {
                        Token::Identifier(_) | Token::LeftBracket => {
                            segments.push(self.segment()?);
                        }
                        Token::Eof => return Err(self.error("trailing '.'")),
                        _ => return Err(self.error("empty segment")),
                    }
                }
                Token::LeftBracket => segments.push(self.bracket()?),
                Token::Assign | Token::AddAssign => break Some(self.assignment()?),
                Token::Eof => break None,
                Token::Placeholder => {
                    return Err(self.error("'%v' is only valid after an assignment operator"));
                }
                other => {
                    let reason = format!("unexpected {other}");
                    return Err(self.error(&reason));
                }
            }
        };
        if segments.len() > self.max_segments {
            return Err(self.error(&format!("more than {} segments", self.max_segments)));
        }

        Ok(PathExpression {
            segments,
            assignment,
            source: self.input.to_string(),
        })
    }

    fn peek(&self) -> &Token {
        self.tokens.front().map_or(&EOF, |s| &s.token)
    }

    fn next(&mut self) -> Token {
        match self.tokens.pop_front() {
            Some(spanned) => {
                self.last_position = spanned.position;
                spanned.token
            }
            None => Token::Eof,
        }
    }

    fn segment(&mut self) -> OpResult<PathSegment> {
        match self.next() {
            Token::Identifier(name) => Ok(PathSegment::Field(name.trim().to_string())),
            Token::LeftBracket => self.bracket_body(),
            other => Err(self.error(&format!("expected a field name or '[', found {other}"))),
        }
    }

    fn bracket(&mut self) -> OpResult<PathSegment> {
        match self.next() {
            Token::LeftBracket => self.bracket_body(),
            other => Err(self.error(&format!("expected '[', found {other}"))),
        }
    }

    /// Parses `INT ']'` or `INT ':' INT ']'` after the opening bracket
    fn bracket_body(&mut self) -> OpResult<PathSegment> {
        let from = self.integer()?;
        match self.next() {
            Token::RightBracket => Ok(PathSegment::Index(from)),
            Token::Colon => {
                let to = self.integer()?;
                match self.next() {
                    Token::RightBracket => {}
                    other => return Err(self.error(&format!("expected ']', found {other}"))),
                }
                if from > to {
                    return Err(self.error(&format!("inverted range [{from}:{to}]")));
                }
                Ok(PathSegment::Range { from, to })
            }
            other => Err(self.error(&format!("expected ']' or ':', found {other}"))),
        }
    }

    fn integer(&mut self) -> OpResult<i64> {
        match self.next() {
            Token::Integer(n) if n < 0 => Err(self.error(&format!("negative index {n}"))),
            Token::Integer(n) => Ok(n),
            other => Err(self.error(&format!("expected an integer, found {other}"))),
        }
    }

    fn assignment(&mut self) -> OpResult<AssignOp> {
        let op = match self.next() {
            Token::Assign => AssignOp::Set,
            Token::AddAssign => AssignOp::Merge,
            other => return Err(self.error(&format!("expected '=' or '+=', found {other}"))),
        };
        match self.next() {
            Token::Placeholder => {}
            _ => return Err(self.error("assignment operator must be followed by '%v'")),
        }
        match self.next() {
            Token::Eof => Ok(op),
            _ => Err(self.error("assignment must be at the end of the path")),
        }
    }

    fn error(&self, reason: &str) -> OpError {
        invalid_expression_error(self.input, reason, Some(self.last_position))
    }
}
