//! Engine configuration
//!
//! The configuration is organized into:
//!
//! - `types`: the `EngineConfig` struct
//! - `defaults`: default values and limits
//! - `builders`: fluent `with_*` methods
//! - `validation`: `ConfigurationError`, the `Validator` trait and JSON loading

pub mod builders;
pub mod defaults;
pub mod types;
pub mod validation;

pub use types::EngineConfig;
pub use validation::{ConfigResult, ConfigurationError, Validator};
