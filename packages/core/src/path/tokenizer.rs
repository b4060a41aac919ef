//! Path expression tokenizer
//!
//! Integers are only recognised between brackets; everywhere else a run of
//! characters that are neither whitespace nor one of `.[]:=+%` is a field
//! name.

use std::collections::VecDeque;

use super::tokens::{Spanned, Token};
use crate::error::{OpResult, invalid_expression_error};

const RESERVED: &[char] = &['.', '[', ']', ':', '=', '+', '%'];

/// Splits an expression into positioned tokens
pub struct Tokenizer<'a> {
    input: &'a str,
    chars: Vec<char>,
    tokens: VecDeque<Spanned>,
    in_brackets: bool,
}

impl<'a> Tokenizer<'a> {
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.chars().collect(),
            tokens: VecDeque::new(),
            in_brackets: false,
        }
    }

    /// Tokenize the whole input; the result always ends with `Token::Eof`
    pub fn tokenize(mut self) -> OpResult<VecDeque<Spanned>> {
        let mut i = 0;
        while i < self.chars.len() {
            let c = self.chars[i];
            i = match c {
                c if c.is_whitespace() => i + 1,
                '.' => self.single(Token::Dot, i),
                ':' => self.single(Token::Colon, i),
                '=' => self.single(Token::Assign, i),
                '[' => {
                    if self.in_brackets {
                        return Err(self.error("nested '['", i));
                    }
                    self.in_brackets = true;
                    self.single(Token::LeftBracket, i)
                }
                ']' => {
                    if !self.in_brackets {
                        return Err(self.error("unmatched ']'", i));
                    }
                    self.in_brackets = false;
                    self.single(Token::RightBracket, i)
                }
                '+' => self.pair('=', Token::AddAssign, "expected '=' after '+'", i)?,
                '%' => self.pair('v', Token::Placeholder, "expected 'v' after '%'", i)?,
                _ if self.in_brackets => self.integer(i)?,
                _ => self.identifier(i),
            };
        }
        if self.in_brackets {
            return Err(self.error("unterminated '['", self.chars.len()));
        }
        self.push(Token::Eof, self.chars.len());
        Ok(self.tokens)
    }

    fn push(&mut self, token: Token, position: usize) {
        self.tokens.push_back(Spanned { token, position });
    }

    fn single(&mut self, token: Token, i: usize) -> usize {
        self.push(token, i);
        i + 1
    }

    fn pair(&mut self, next: char, token: Token, reason: &str, i: usize) -> OpResult<usize> {
        if self.chars.get(i + 1) != Some(&next) {
            return Err(self.error(reason, i));
        }
        self.push(token, i);
        Ok(i + 2)
    }

    fn integer(&mut self, start: usize) -> OpResult<usize> {
        let mut i = start;
        if self.chars[i] == '-' {
            i += 1;
        }
        let digits = i;
        while i < self.chars.len() && self.chars[i].is_ascii_digit() {
            i += 1;
        }
        if i == digits {
            return Err(self.error("expected an integer inside brackets", start));
        }

        let literal: String = self.chars[start..i].iter().collect();
        let value = literal
            .parse::<i64>()
            .map_err(|_| self.error("integer out of range", start))?;
        self.push(Token::Integer(value), start);
        Ok(i)
    }

    fn identifier(&mut self, start: usize) -> usize {
        let mut i = start;
        while i < self.chars.len()
            && !self.chars[i].is_whitespace()
            && !RESERVED.contains(&self.chars[i])
        {
            i += 1;
        }
        let name: String = self.chars[start..i].iter().collect();
        self.push(Token::Identifier(name), start);
        i
    }

    fn error(&self, reason: &str, position: usize) -> crate::error::OpError {
        invalid_expression_error(self.input, reason, Some(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        Tokenizer::new(input)
            .tokenize()
            .expect("tokenize")
            .into_iter()
            .map(|s| s.token)
            .collect()
    }

    #[test]
    fn field_path() {
        assert_eq!(
            tokens(".A.b"),
            vec![
                Token::Dot,
                Token::Identifier("A".into()),
                Token::Dot,
                Token::Identifier("b".into()),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn digits_outside_brackets_are_names() {
        assert_eq!(
            tokens(".1"),
            vec![Token::Dot, Token::Identifier("1".into()), Token::Eof]
        );
    }

    #[test]
    fn range_and_merge() {
        assert_eq!(
            tokens(".[1: 2] += %v"),
            vec![
                Token::Dot,
                Token::LeftBracket,
                Token::Integer(1),
                Token::Colon,
                Token::Integer(2),
                Token::RightBracket,
                Token::AddAssign,
                Token::Placeholder,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn negative_integer_is_a_token() {
        assert_eq!(tokens(".[-1]")[2], Token::Integer(-1));
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in [".[a]", ".[1", ".A]", ".[[1]]", ".A + %v", ".A = %x", ".[-]"] {
            assert!(Tokenizer::new(bad).tokenize().is_err(), "{bad}");
        }
    }
}
