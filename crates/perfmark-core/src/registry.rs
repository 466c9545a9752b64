//! Named timing windows.
//!
//! A [`Registry`] maps a metric name to at most one [`Metric`]. `start`
//! opens (or reopens) the window, `end` closes it and reports slow work.
//! The registry is an owned value: construct one per owning context and
//! share it by reference or `Arc`.
//!
//! Windows are keyed by name only. Two overlapping users of the same name
//! overwrite each other; keeping names distinct is up to the caller.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use tracing::{debug, warn};

use crate::clock::{Clock, MonotonicClock};
use crate::error::{PerfmarkError, Result};
use crate::metric::Metric;

/// Durations above this many ms are reported as slow.
pub const DEFAULT_SLOW_THRESHOLD_MS: f64 = 1000.0;

/// Largest accepted slow threshold (one hour).
pub const MAX_SLOW_THRESHOLD_MS: f64 = 3_600_000.0;

/// Enabled by default only in debug builds.
pub const DEFAULT_ENABLED: bool = cfg!(debug_assertions);

/// A slow threshold must be finite and within `(0, MAX_SLOW_THRESHOLD_MS]`.
pub fn validate_slow_threshold(ms: f64) -> Result<()> {
    if !ms.is_finite() || ms <= 0.0 || ms > MAX_SLOW_THRESHOLD_MS {
        return Err(PerfmarkError::BadConfig(format!(
            "slow_threshold_ms must be > 0 and <= 3600000, got {ms}"
        )));
    }
    Ok(())
}

pub struct Registry {
    metrics: DashMap<String, Metric>,
    enabled: AtomicBool,
    slow_threshold_ms: f64,
    clock: Arc<dyn Clock>,
}

impl Registry {
    /// Registry with build-profile defaults and a monotonic clock.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Open a window for `name`, replacing any previous one.
    pub fn start(&self, name: &str) {
        if !self.is_enabled() {
            return;
        }
        let now = self.clock.now_ms();
        let prev = self.metrics.insert(name.to_string(), Metric::started(name, now));

        if prev.is_some_and(|m| m.is_pending()) {
            debug!(metric = %name, "pending metric restarted");
        }
    }

    /// Close the window for `name` and return its duration in ms.
    ///
    /// Returns `None` when disabled or when no window exists. A missing window
    /// is logged, never raised.
    pub fn end(&self, name: &str) -> Option<f64> {
        if !self.is_enabled() {
            return None;
        }
        let now = self.clock.now_ms();

        let Some(mut metric) = self.metrics.get_mut(name) else {
            warn!(metric = %name, "Metric not found: {name}");
            return None;
        };
        let duration = metric.finish(now);
        drop(metric);

        if duration > self.slow_threshold_ms {
            warn!(
                metric = %name,
                duration_ms = duration,
                "Slow operation detected: {name} took {duration:.2}ms"
            );
        }
        Some(duration)
    }

    /// Stored duration, if `name` exists and has been ended.
    pub fn duration(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).and_then(|m| m.duration())
    }

    /// Copy of the metric stored under `name`.
    pub fn get(&self, name: &str) -> Option<Metric> {
        self.metrics.get(name).map(|m| m.value().clone())
    }

    /// Snapshot of every stored metric. Order is unspecified.
    pub fn all_metrics(&self) -> Vec<Metric> {
        self.metrics.iter().map(|r| r.value().clone()).collect()
    }

    pub fn clear(&self) {
        self.metrics.clear();
    }

    /// Toggle recording. Stored metrics are kept either way.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    pub fn slow_threshold_ms(&self) -> f64 {
        self.slow_threshold_ms
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("enabled", &self.is_enabled())
            .field("slow_threshold_ms", &self.slow_threshold_ms)
            .field("metrics", &self.metrics.len())
            .finish()
    }
}

pub struct RegistryBuilder {
    enabled: bool,
    slow_threshold_ms: f64,
    clock: Option<Arc<dyn Clock>>,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_ENABLED,
            slow_threshold_ms: DEFAULT_SLOW_THRESHOLD_MS,
            clock: None,
        }
    }
}

impl RegistryBuilder {
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Invalid values are replaced by the default at `build()`.
    pub fn slow_threshold_ms(mut self, ms: f64) -> Self {
        self.slow_threshold_ms = ms;
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn build(self) -> Registry {
        let slow_threshold_ms = match validate_slow_threshold(self.slow_threshold_ms) {
            Ok(()) => self.slow_threshold_ms,
            Err(e) => {
                warn!(
                    error = %e,
                    fallback_ms = DEFAULT_SLOW_THRESHOLD_MS,
                    "invalid slow threshold, using default"
                );
                DEFAULT_SLOW_THRESHOLD_MS
            }
        };

        Registry {
            metrics: DashMap::new(),
            enabled: AtomicBool::new(self.enabled),
            slow_threshold_ms,
            clock: self
                .clock
                .unwrap_or_else(|| Arc::new(MonotonicClock::new()) as Arc<dyn Clock>),
        }
    }
}
