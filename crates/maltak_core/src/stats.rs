//! Store statistics.
//!
//! Provides counters for monitoring how the store is being used.
//!
//! # Usage
//!
//! ```rust,ignore
//! use maltak_core::ContentStore;
//!
//! let store = ContentStore::open(Config::default());
//! store.popular_articles(None);
//!
//! let stats = store.stats().snapshot();
//! println!("Scans: {}", stats.scans);
//! ```

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Store statistics.
///
/// All counters are atomic and can be read while operations are in progress.
/// Values only ever increase.
#[derive(Debug, Default)]
pub struct StoreStats {
    /// Point lookups by identity, slug or email.
    reads: AtomicU64,
    /// Records created or replaced.
    writes: AtomicU64,
    /// Full-table scans (every list, filter and search).
    scans: AtomicU64,
    /// Article views recorded.
    views_recorded: AtomicU64,
    /// Join steps that hit a dangling foreign key.
    integrity_failures: AtomicU64,
}

impl StoreStats {
    /// Creates a new stats instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_read(&self) {
        self.reads.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_write(&self) {
        self.writes.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_scan(&self) {
        self.scans.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_view(&self) {
        self.views_recorded.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_integrity_failure(&self) {
        self.integrity_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns the number of point lookups.
    pub fn reads(&self) -> u64 {
        self.reads.load(Ordering::Relaxed)
    }

    /// Returns the number of records created or replaced.
    pub fn writes(&self) -> u64 {
        self.writes.load(Ordering::Relaxed)
    }

    /// Returns the number of full-table scans.
    pub fn scans(&self) -> u64 {
        self.scans.load(Ordering::Relaxed)
    }

    /// Returns the number of article views recorded.
    pub fn views_recorded(&self) -> u64 {
        self.views_recorded.load(Ordering::Relaxed)
    }

    /// Returns the number of failed joins.
    ///
    /// Anything above zero means the store holds a dangling reference.
    pub fn integrity_failures(&self) -> u64 {
        self.integrity_failures.load(Ordering::Relaxed)
    }

    /// Returns a snapshot of all stats.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            reads: self.reads(),
            writes: self.writes(),
            scans: self.scans(),
            views_recorded: self.views_recorded(),
            integrity_failures: self.integrity_failures(),
        }
    }
}

/// A point-in-time copy of [`StoreStats`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct StatsSnapshot {
    /// Point lookups.
    pub reads: u64,
    /// Records created or replaced.
    pub writes: u64,
    /// Full-table scans.
    pub scans: u64,
    /// Article views recorded.
    pub views_recorded: u64,
    /// Failed joins.
    pub integrity_failures: u64,
}
