// Request counter module
// In-process counters reported by the dashboard and the metrics endpoint

use std::sync::atomic::{AtomicU64, Ordering};

/// Counter values captured at one point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub requests: u64,
    pub data_reads: u64,
    pub data_writes: u64,
    pub errors: u64,
}

/// Shared counter set, reset on process restart
#[derive(Debug, Default)]
pub struct RequestMetrics {
    pub requests: AtomicU64,
    pub data_reads: AtomicU64,
    pub data_writes: AtomicU64,
    pub errors: AtomicU64,
}

impl RequestMetrics {
    pub const fn new() -> Self {
        Self {
            requests: AtomicU64::new(0),
            data_reads: AtomicU64::new(0),
            data_writes: AtomicU64::new(0),
            errors: AtomicU64::new(0),
        }
    }

    /// Dashboard page views
    pub fn record_request(&self) -> u64 {
        self.requests.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Successful listings and reads of the data volume
    pub fn record_data_read(&self) -> u64 {
        self.data_reads.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Successful file creations in the data volume
    pub fn record_data_write(&self) -> u64 {
        self.data_writes.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Failed volume operations of any kind
    pub fn record_error(&self) -> u64 {
        self.errors.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn request_count(&self) -> u64 {
        self.requests.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requests: self.requests.load(Ordering::SeqCst),
            data_reads: self.data_reads.load(Ordering::SeqCst),
            data_writes: self.data_writes.load(Ordering::SeqCst),
            errors: self.errors.load(Ordering::SeqCst),
        }
    }
}
