//! Emitter metrics
//!
//! Counters for monitoring an emitter: lines written, records dropped by the
//! level filter, and failed writes.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for a single emitter
///
/// # Example
///
/// ```
/// use simple_console_logger::EmitterMetrics;
///
/// let metrics = EmitterMetrics::new();
/// metrics.record_written();
/// metrics.record_filtered();
///
/// assert_eq!(metrics.lines_written(), 1);
/// assert_eq!(metrics.filtered_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct EmitterMetrics {
    /// Lines fully written to the destination
    lines_written: AtomicU64,

    /// Records dropped because their level was below the threshold
    filtered: AtomicU64,

    /// Writes or flushes that returned an error
    write_failures: AtomicU64,
}

impl EmitterMetrics {
    pub const fn new() -> Self {
        Self {
            lines_written: AtomicU64::new(0),
            filtered: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn lines_written(&self) -> u64 {
        self.lines_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered_count(&self) -> u64 {
        self.filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_written(&self) {
        self.lines_written.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_filtered(&self) {
        self.filtered.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_write_failure(&self) {
        self.write_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn reset(&self) {
        self.lines_written.store(0, Ordering::Relaxed);
        self.filtered.store(0, Ordering::Relaxed);
        self.write_failures.store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_counters_start_at_zero() {
        let metrics = EmitterMetrics::new();
        assert_eq!(metrics.lines_written(), 0);
        assert_eq!(metrics.filtered_count(), 0);
        assert_eq!(metrics.write_failures(), 0);
    }

    #[test]
    fn test_reset() {
        let metrics = EmitterMetrics::new();
        metrics.record_written();
        metrics.record_write_failure();
        metrics.reset();
        assert_eq!(metrics.lines_written(), 0);
        assert_eq!(metrics.write_failures(), 0);
    }

    #[test]
    fn test_concurrent_updates() {
        let metrics = Arc::new(EmitterMetrics::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let metrics = Arc::clone(&metrics);
                thread::spawn(move || {
                    for _ in 0..1000 {
                        metrics.record_written();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("thread panicked");
        }
        assert_eq!(metrics.lines_written(), 8000);
    }
}
