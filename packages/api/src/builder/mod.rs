//! Path builder API modules
//!
//! Fluent construction of a path, an optional bound value, and the
//! terminal compile / apply / read calls.

pub mod core;
pub mod execution;
pub mod value;

pub use self::core::*;
