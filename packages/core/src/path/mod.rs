//! Path expression compiler
//!
//! Turns expressions such as `.A.B`, `.Def.[1:2]` or `. += %v` into a
//! [`Chain`](crate::ops::Chain) of primitive operations:
//!
//! - `tokens` / `tokenizer`: lexical analysis
//! - `ast`: parsed segments and the trailing assignment
//! - `parser`: segment grammar and validation
//! - `compiler`: lowering to operations

pub mod ast;
pub mod compiler;
pub mod parser;
pub mod tokenizer;
pub mod tokens;

pub use ast::{AssignOp, PathExpression, PathSegment};
pub use compiler::PathCompiler;
pub use tokens::Token;
