//! Essential types for building and applying paths

pub use crate::config::{EngineConfig, Validator};
pub use crate::decode::{Decoder, JsonDecoder, Payload};
pub use crate::engine::PathEngine;
pub use crate::error::{ErrorKind, OpError, OpResult};
pub use crate::ops::{Addition, Chain, Dot, FnOp, Index, Op, OpExt, Range, Set};
pub use crate::path::{AssignOp, PathCompiler, PathExpression, PathSegment};
pub use crate::tags::FieldTagRegistry;
pub use crate::value::{Handle, Key, Mapping, Optional, Record, RecordType, Sequence, Type, Value};
