//! Registry statistics

use std::sync::atomic::{AtomicU64, Ordering};

/// Lookup and build counters for a `FieldTagRegistry`
#[derive(Debug, Default)]
pub struct RegistryStats {
    /// Table lookups served from the registry
    pub hits: AtomicU64,
    /// Table lookups that had to scan field metadata
    pub misses: AtomicU64,
    /// Tables computed but discarded because another caller stored first
    pub discarded_builds: AtomicU64,
}

impl RegistryStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_discarded_build(&self) {
        self.discarded_builds.fetch_add(1, Ordering::Relaxed);
    }

    #[must_use]
    pub fn snapshot(&self) -> RegistryStatsSnapshot {
        RegistryStatsSnapshot {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            discarded_builds: self.discarded_builds.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of `RegistryStats`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegistryStatsSnapshot {
    pub hits: u64,
    pub misses: u64,
    pub discarded_builds: u64,
}

impl RegistryStatsSnapshot {
    /// Fraction of lookups served without a table build
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
