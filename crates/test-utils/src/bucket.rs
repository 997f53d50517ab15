//! A stand-in bucket for registry tests.
//!
//! The registry never looks inside a bucket, so tests only need a value whose
//! identity and construction count can be observed.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Bucket with a process-unique id assigned at construction.
#[derive(Debug)]
pub struct TestBucket {
    id: u64,
    writes: AtomicU64,
}

impl TestBucket {
    /// Creates a bucket with the next unused id.
    pub fn new() -> Self {
        Self { id: NEXT_ID.fetch_add(1, Ordering::Relaxed), writes: AtomicU64::new(0) }
    }

    /// Returns the id assigned at construction.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Records a write and returns the new total.
    pub fn record_write(&self) -> u64 {
        self.writes.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Returns the number of recorded writes.
    pub fn writes(&self) -> u64 {
        self.writes.load(Ordering::Relaxed)
    }
}

impl Default for TestBucket {
    fn default() -> Self {
        Self::new()
    }
}
