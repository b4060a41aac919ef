//! # jqpath core
//!
//! Path expressions over dynamically typed values. A path such as
//! `.Def.[1:2]` or `.Map.coucou += %v` compiles into a chain of composable
//! operations that read, assign or merge nested data in place.
//!
//! ## Features
//!
//! - **Typed value model**: records, mappings, sequences, optionals and
//!   scalars, each carrying its runtime [`Type`](value::Type)
//! - **Composable operations**: [`Dot`](ops::Dot), [`Index`](ops::Index),
//!   [`Range`](ops::Range), [`Set`](ops::Set) and [`Addition`](ops::Addition)
//!   with continuations, chained by [`Chain`](ops::Chain)
//! - **Field tags**: record fields addressable by their external names,
//!   resolved through a shared, lazily filled registry
//! - **Raw payloads**: JSON decoded into the target type at assignment time
//!
//! ## Usage
//!
//! ```rust
//! use jqpath_core::prelude::*;
//!
//! let engine = PathEngine::new();
//! let mut root = Value::from(Mapping::empty(Type::Str, Type::Int).with("a", 1).unwrap());
//!
//! engine.compile_with(".a = %v", 2).unwrap().apply_to(&mut root).unwrap();
//! assert_eq!(root.to_json(), serde_json::json!({ "a": 2 }));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod config;
pub mod decode;
pub mod engine;
pub mod error;
pub mod ops;
pub mod path;
pub mod prelude;
pub mod tags;
pub mod value;

pub use engine::PathEngine;
pub use error::{ErrorKind, OpError, OpResult};
