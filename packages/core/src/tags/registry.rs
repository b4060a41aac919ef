//! Concurrent per-record-type tag tables

use std::sync::Arc;

use dashmap::DashMap;
use hashbrown::HashMap;

use super::stats::{RegistryStats, RegistryStatsSnapshot};
use crate::value::{RecordType, RecordTypeId};

/// External field name to field position, for one record type
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TagTable {
    positions: HashMap<String, usize>,
}

impl TagTable {
    /// Scan a record type's field tags
    ///
    /// Untagged fields, fields whose tag has an empty name part and fields
    /// tagged `-` are left out. A later field reusing a tag name replaces an
    /// earlier one.
    #[must_use]
    pub fn build(ty: &RecordType) -> Self {
        let positions = ty
            .fields()
            .iter()
            .enumerate()
            .filter_map(|(pos, field)| field.external_name().map(|name| (name.to_string(), pos)))
            .collect();
        Self { positions }
    }

    #[must_use]
    pub fn position(&self, external_name: &str) -> Option<usize> {
        self.positions.get(external_name).copied()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Lazily filled registry of tag tables, keyed by record type identity
///
/// Create one at program start and hand it to the engine; every lookup
/// after the first for a given type is a single sharded read. When two
/// threads build the same table concurrently, the first one stored wins
/// and both return it.
#[derive(Debug, Default)]
pub struct FieldTagRegistry {
    tables: DashMap<RecordTypeId, Arc<TagTable>>,
    stats: RegistryStats,
}

impl FieldTagRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag table for a record type, building it on first use
    pub fn table_for(&self, ty: &RecordType) -> Arc<TagTable> {
        let id = ty.id();
        if let Some(table) = self.tables.get(&id).map(|entry| Arc::clone(entry.value())) {
            self.stats.record_hit();
            return table;
        }

        self.stats.record_miss();
        let built = Arc::new(TagTable::build(ty));
        log::debug!(
            "built tag table for record type {ty} with {} tagged fields",
            built.len()
        );

        let stored = Arc::clone(self.tables.entry(id).or_insert_with(|| Arc::clone(&built)).value());
        if !Arc::ptr_eq(&stored, &built) {
            self.stats.record_discarded_build();
        }
        stored
    }

    /// Position of the field tagged `external_name`, if any
    pub fn lookup(&self, ty: &RecordType, external_name: &str) -> Option<usize> {
        self.table_for(ty).position(external_name)
    }

    /// Whether a table for this record type has been stored
    #[must_use]
    pub fn contains(&self, ty: &RecordType) -> bool {
        self.tables.contains_key(&ty.id())
    }

    /// Number of record types with a stored table
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> RegistryStatsSnapshot {
        self.stats.snapshot()
    }
}
