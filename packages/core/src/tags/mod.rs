//! Field-tag registry
//!
//! Resolves path segments written with external field names (tags) to the
//! position of the record field carrying that tag. Tables are built lazily,
//! once per record type, and shared by every operation holding the registry.

mod registry;
mod stats;

pub use registry::{FieldTagRegistry, TagTable};
pub use stats::{RegistryStats, RegistryStatsSnapshot};
