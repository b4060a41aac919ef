//! Default values for `EngineConfig`

use super::types::EngineConfig;

/// Default maximum path expression length in bytes
pub const DEFAULT_MAX_PATH_LEN: usize = 4096;

/// Default maximum number of path segments
pub const DEFAULT_MAX_SEGMENTS: usize = 256;

/// Hard upper bound accepted for `max_path_len`
pub const MAX_PATH_LEN_LIMIT: usize = 1 << 20;

/// Hard upper bound accepted for `max_segments`
pub const MAX_SEGMENTS_LIMIT: usize = 1 << 16;

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            deny_unknown_fields: true,
            max_path_len: DEFAULT_MAX_PATH_LEN,
            max_segments: DEFAULT_MAX_SEGMENTS,
        }
    }
}
