//! Conversions into `OpError`

use serde_json::error::Category;

use super::types::{ErrorKind, OpError};

/// Raw payloads that fail to parse or decode surface as decode errors
impl From<serde_json::Error> for OpError {
    fn from(error: serde_json::Error) -> Self {
        let message = match error.classify() {
            Category::Syntax | Category::Eof => format!("malformed JSON payload: {error}"),
            Category::Data | Category::Io => error.to_string(),
        };
        OpError::new(ErrorKind::DecodeError, message)
    }
}
