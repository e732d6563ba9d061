//! Prediction Cache - bounded FIFO store keyed by content hash
//!
//! Eviction is strictly insertion-ordered: when the store is full the
//! oldest-inserted entry goes, regardless of how recently it was read.
//! This is a FIFO, not an LRU - `get` never refreshes an entry's position.

use std::collections::{HashMap, VecDeque};

use parking_lot::RwLock;

use crate::models::PredictionRecord;

/// Bounded prediction store. Created once at startup, shared via `Arc`.
///
/// All mutations serialize through the write lock; reads take the read lock
/// of the same `RwLock`, so no reader can observe a half-applied insert or
/// eviction.
pub struct PredictionCache {
    inner: RwLock<CacheInner>,
    capacity: usize,
}

struct CacheInner {
    entries: HashMap<String, CacheEntry>,
    /// Keys in insertion order, oldest at the front.
    order: VecDeque<String>,
    next_seq: u64,
}

struct CacheEntry {
    record: PredictionRecord,
    /// Monotonic insertion sequence number. An overwrite keeps the original.
    inserted_seq: u64,
}

/// Cache occupancy snapshot
#[derive(Debug, Clone, serde::Serialize)]
pub struct CacheStats {
    pub entries: usize,
    pub capacity: usize,
    pub fill_percent: f32,
}

impl PredictionCache {
    /// Create a cache holding at most `capacity` entries.
    ///
    /// Capacity 0 is a valid degenerate configuration: every `set` is a
    /// no-op, so nothing is ever stored or momentarily visible.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: RwLock::new(CacheInner {
                entries: HashMap::with_capacity(capacity),
                order: VecDeque::with_capacity(capacity),
                next_seq: 0,
            }),
            capacity,
        }
    }

    /// Look up a record by content hash. Pure read: does not affect
    /// eviction order.
    pub fn get(&self, key: &str) -> Option<PredictionRecord> {
        let inner = self.inner.read();
        inner.entries.get(key).map(|e| e.record.clone())
    }

    /// Insert or overwrite a record.
    ///
    /// Overwriting an existing key updates the value but keeps the original
    /// insertion position, so an overwrite never extends an entry's lifetime.
    /// Inserting a brand-new key at capacity evicts exactly the
    /// oldest-inserted entry first.
    pub fn set(&self, key: String, record: PredictionRecord) {
        if self.capacity == 0 {
            return;
        }

        let mut inner = self.inner.write();

        if let Some(entry) = inner.entries.get_mut(&key) {
            entry.record = record;
            return;
        }

        if inner.entries.len() >= self.capacity {
            if let Some(oldest) = inner.order.pop_front() {
                if let Some(evicted) = inner.entries.remove(&oldest) {
                    tracing::debug!(
                        "Cache full, evicted oldest entry {} (insert #{})",
                        oldest,
                        evicted.inserted_seq
                    );
                }
            }
        }

        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.order.push_back(key.clone());
        inner.entries.insert(
            key,
            CacheEntry {
                record,
                inserted_seq: seq,
            },
        );
    }

    /// Remove every entry.
    pub fn clear(&self) {
        let mut inner = self.inner.write();
        inner.entries.clear();
        inner.order.clear();
    }

    /// Number of entries currently stored.
    pub fn len(&self) -> usize {
        self.inner.read().entries.len()
    }

    /// Returns `true` if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.read().entries.is_empty()
    }

    /// Configured capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Occupancy snapshot for the admin endpoint.
    pub fn stats(&self) -> CacheStats {
        let inner = self.inner.read();
        CacheStats {
            entries: inner.entries.len(),
            capacity: self.capacity,
            fill_percent: if self.capacity > 0 {
                (inner.entries.len() as f32 / self.capacity as f32 * 100.0).min(100.0)
            } else {
                0.0
            },
        }
    }
}
