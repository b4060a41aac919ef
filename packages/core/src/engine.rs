//! Shared collaborators for building operations
//!
//! A [`PathEngine`] bundles the configuration, the field-tag registry and
//! the payload decoder. Operations built from one engine share the same
//! registry, so tag tables are computed once per record type.

use std::sync::Arc;

use crate::config::{ConfigResult, EngineConfig, Validator};
use crate::decode::{Decoder, JsonDecoder, Payload};
use crate::error::OpResult;
use crate::ops::{Addition, Chain, Dot, Index, Range, Set};
use crate::path::{PathCompiler, PathExpression};
use crate::tags::FieldTagRegistry;

#[derive(Debug, Clone)]
pub struct PathEngine {
    config: Arc<EngineConfig>,
    tags: Arc<FieldTagRegistry>,
    decoder: Arc<dyn Decoder>,
}

impl PathEngine {
    /// Engine with the default configuration and a fresh registry
    #[must_use]
    pub fn new() -> Self {
        Self::build(EngineConfig::default(), Arc::new(FieldTagRegistry::new()))
    }

    /// Engine with a validated configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidLimit` when `config` fails
    /// validation.
    pub fn with_config(config: EngineConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::build(config, Arc::new(FieldTagRegistry::new())))
    }

    /// Engine sharing an existing registry
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidLimit` when `config` fails
    /// validation.
    pub fn with_registry(
        config: EngineConfig,
        tags: Arc<FieldTagRegistry>,
    ) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::build(config, tags))
    }

    fn build(config: EngineConfig, tags: Arc<FieldTagRegistry>) -> Self {
        let decoder = JsonDecoder::new(Arc::clone(&tags))
            .with_deny_unknown_fields(config.deny_unknown_fields);
        Self {
            config: Arc::new(config),
            tags,
            decoder: Arc::new(decoder),
        }
    }

    /// Replace the payload decoder
    #[must_use]
    pub fn with_decoder(mut self, decoder: Arc<dyn Decoder>) -> Self {
        self.decoder = decoder;
        self
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub fn tags(&self) -> &Arc<FieldTagRegistry> {
        &self.tags
    }

    #[inline]
    #[must_use]
    pub fn decoder(&self) -> &Arc<dyn Decoder> {
        &self.decoder
    }

    #[must_use]
    pub fn dot(&self, key: impl AsRef<str>) -> Dot {
        Dot::new(key, Arc::clone(&self.tags))
    }

    /// # Errors
    ///
    /// Returns `InvalidArgument` for a negative index.
    pub fn index(&self, index: i64) -> OpResult<Index> {
        Index::new(index)
    }

    /// # Errors
    ///
    /// Returns `InvalidArgument` for negative or inverted bounds.
    pub fn range(&self, from: i64, to: i64) -> OpResult<Range> {
        Range::new(from, to)
    }

    #[must_use]
    pub fn set(&self, payload: impl Into<Payload>) -> Set {
        Set::new(payload, Arc::clone(&self.decoder))
    }

    #[must_use]
    pub fn addition(&self, payload: impl Into<Payload>) -> Addition {
        Addition::new(payload, Arc::clone(&self.tags), Arc::clone(&self.decoder))
    }

    #[must_use]
    pub fn compiler(&self) -> PathCompiler {
        PathCompiler::new(self.clone())
    }

    /// Parse without compiling
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` for malformed expressions.
    pub fn parse(&self, expression: &str) -> OpResult<PathExpression> {
        self.compiler().parse(expression)
    }

    /// Compile a read-only path
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` for malformed expressions, or when the
    /// expression contains an assignment.
    pub fn compile(&self, expression: &str) -> OpResult<Chain> {
        self.compiler().compile(expression)
    }

    /// Compile a path whose `%v` placeholder binds `payload`
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` for malformed expressions, or when the
    /// expression has no assignment.
    pub fn compile_with(&self, expression: &str, payload: impl Into<Payload>) -> OpResult<Chain> {
        self.compiler().compile_with(expression, payload)
    }
}

impl Default for PathEngine {
    fn default() -> Self {
        Self::new()
    }
}
