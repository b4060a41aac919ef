//! Engine configuration structure

use serde::{Deserialize, Serialize};

/// Settings shared by the path compiler and the decoder
///
/// Missing fields fall back to their defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Reject raw payload members that have no matching record field
    pub deny_unknown_fields: bool,

    /// Maximum accepted path expression length, in bytes
    pub max_path_len: usize,

    /// Maximum number of segments in one path expression
    pub max_segments: usize,
}
