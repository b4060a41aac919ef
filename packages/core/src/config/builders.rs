//! Builder methods for engine configuration

use super::types::EngineConfig;

impl EngineConfig {
    /// Enable or disable rejection of unknown record fields in raw payloads
    ///
    /// # Examples
    /// ```
    /// use jqpath_core::config::EngineConfig;
    ///
    /// let config = EngineConfig::default().with_deny_unknown_fields(false);
    /// assert!(!config.deny_unknown_fields);
    /// ```
    #[must_use]
    pub fn with_deny_unknown_fields(mut self, deny: bool) -> Self {
        self.deny_unknown_fields = deny;
        self
    }

    /// Set the maximum path expression length in bytes
    #[must_use]
    pub fn with_max_path_len(mut self, len: usize) -> Self {
        self.max_path_len = len;
        self
    }

    /// Set the maximum number of segments per path expression
    #[must_use]
    pub fn with_max_segments(mut self, segments: usize) -> Self {
        self.max_segments = segments;
        self
    }
}
