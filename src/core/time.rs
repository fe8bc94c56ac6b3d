//! Host time.
//!
//! Lease arithmetic is driven by seconds sampled from the host's
//! untrusted clock. The sample is taken once per request at the RPC
//! boundary and threaded through the stores as a plain parameter, so
//! the stores themselves stay deterministic per transaction.

use std::sync::atomic::{AtomicI64, Ordering};

/// A source of untrusted host time in whole seconds.
pub trait TimeSource: Send + Sync {
    /// Current time in seconds since the Unix epoch.
    fn now_seconds(&self) -> i64;
}

/// Wall-clock time source used in production.
#[derive(Debug, Default)]
pub struct WallClock;

impl TimeSource for WallClock {
    fn now_seconds(&self) -> i64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }
}

/// Manually-stepped time source for tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    seconds: AtomicI64,
}

impl ManualClock {
    /// Create a clock frozen at the given second.
    pub fn at(seconds: i64) -> Self {
        Self {
            seconds: AtomicI64::new(seconds),
        }
    }

    /// Jump the clock to an absolute second.
    pub fn set(&self, seconds: i64) {
        self.seconds.store(seconds, Ordering::Release);
    }

    /// Advance the clock by a number of seconds.
    pub fn advance(&self, seconds: i64) {
        self.seconds.fetch_add(seconds, Ordering::AcqRel);
    }
}

impl TimeSource for ManualClock {
    fn now_seconds(&self) -> i64 {
        self.seconds.load(Ordering::Acquire)
    }
}
