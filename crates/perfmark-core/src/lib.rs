//! perfmark core: named timing windows, time sources, and the shared error type.
//!
//! This crate carries no runtime or config dependencies so it can be embedded
//! anywhere a [`Registry`] can be owned and passed by reference.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Instrumentation
//! must never take down the code it measures: a missing metric is a logged
//! warning, a disabled registry is a silent no-op.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod clock;
pub mod error;
pub mod metric;
pub mod registry;
pub mod timing;

pub use clock::{Clock, ManualClock, MonotonicClock};
/// Shared result type.
pub use error::{PerfmarkError, Result};
pub use metric::Metric;
pub use registry::{validate_slow_threshold, Registry, RegistryBuilder};
pub use registry::{DEFAULT_ENABLED, DEFAULT_SLOW_THRESHOLD_MS, MAX_SLOW_THRESHOLD_MS};
pub use timing::MetricGuard;
