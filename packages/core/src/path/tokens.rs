//! Token definitions for path expressions

use std::fmt;

/// Lexical token of a path expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Segment separator (.)
    Dot,
    /// Left bracket ([)
    LeftBracket,
    /// Right bracket (])
    RightBracket,
    /// Range separator (:)
    Colon,
    /// Integer inside brackets
    Integer(i64),
    /// Field name, already trimmed
    Identifier(String),
    /// Set operator (=)
    Assign,
    /// Merge operator (+=)
    AddAssign,
    /// Value placeholder (%v)
    Placeholder,
    /// End of input
    Eof,
}

impl Token {
    #[inline]
    #[must_use]
    pub fn is_assignment(&self) -> bool {
        matches!(self, Token::Assign | Token::AddAssign)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Dot => f.write_str("'.'"),
            Token::LeftBracket => f.write_str("'['"),
            Token::RightBracket => f.write_str("']'"),
            Token::Colon => f.write_str("':'"),
            Token::Integer(n) => write!(f, "integer {n}"),
            Token::Identifier(name) => write!(f, "name \"{name}\""),
            Token::Assign => f.write_str("'='"),
            Token::AddAssign => f.write_str("'+='"),
            Token::Placeholder => f.write_str("'%v'"),
            Token::Eof => f.write_str("end of input"),
        }
    }
}

/// Token with the character position it starts at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned {
    pub token: Token,
    pub position: usize,
}
