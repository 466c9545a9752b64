//! Time sources for the registry.
//!
//! Timestamps are fractional milliseconds on a monotonic scale. Only ordering
//! within one process matters; there is no calendar meaning.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Monotonic millisecond clock.
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> f64;
}

/// `Instant`-backed clock anchored at construction.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    anchor: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            anchor: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> f64 {
        self.anchor.elapsed().as_secs_f64() * 1000.0
    }
}

/// Hand-driven clock for deterministic timing.
///
/// The current value is kept as `f64` bits in an atomic so the clock can be
/// shared through `Arc` and advanced while a registry holds it.
#[derive(Debug, Default)]
pub struct ManualClock {
    bits: AtomicU64,
}

impl ManualClock {
    /// Start at `ms`.
    pub fn at(ms: f64) -> Self {
        Self {
            bits: AtomicU64::new(ms.to_bits()),
        }
    }

    pub fn set_ms(&self, ms: f64) {
        self.bits.store(ms.to_bits(), Ordering::Relaxed);
    }

    /// Move forward by `delta` ms. Negative deltas are ignored to stay monotonic.
    pub fn advance_ms(&self, delta: f64) {
        if delta <= 0.0 {
            return;
        }
        let _ = self
            .bits
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |b| {
                Some((f64::from_bits(b) + delta).to_bits())
            });
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Relaxed))
    }
}
