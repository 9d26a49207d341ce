//! Search Statistics Module
//!
//! Tracks cache-aside performance: hits, misses, provider calls and write-backs.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

// == Search Stats ==
/// Point-in-time snapshot of the search counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Lookups answered from the store
    pub hits: u64,
    /// Lookups that fell through to the provider (store unavailable included)
    pub misses: u64,
    /// Provider calls attempted
    pub remote_calls: u64,
    /// Provider calls that failed
    pub remote_errors: u64,
    /// Successful write-backs
    pub writebacks: u64,
    /// Write-backs that failed on a reachable store
    pub writeback_failures: u64,
    /// Requests whose parameters were replaced by defaults
    pub normalizations: u64,
}

impl SearchStats {
    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if no requests have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

// == Stats Recorder ==
/// Lock-free counters shared by concurrent searches.
#[derive(Debug, Default)]
pub struct StatsRecorder {
    hits: AtomicU64,
    misses: AtomicU64,
    remote_calls: AtomicU64,
    remote_errors: AtomicU64,
    writebacks: AtomicU64,
    writeback_failures: AtomicU64,
    normalizations: AtomicU64,
}

impl StatsRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_remote_call(&self) {
        self.remote_calls.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_remote_error(&self) {
        self.remote_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_writeback(&self) {
        self.writebacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_writeback_failure(&self) {
        self.writeback_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_normalization(&self) {
        self.normalizations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> SearchStats {
        SearchStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            remote_calls: self.remote_calls.load(Ordering::Relaxed),
            remote_errors: self.remote_errors.load(Ordering::Relaxed),
            writebacks: self.writebacks.load(Ordering::Relaxed),
            writeback_failures: self.writeback_failures.load(Ordering::Relaxed),
            normalizations: self.normalizations.load(Ordering::Relaxed),
        }
    }
}
