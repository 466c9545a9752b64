//! perfmark runtime library entry.
//!
//! Wires config, tracing, and the metric registry into a process-level
//! [`app_state::AppState`]. Consumed by the demo binary and integration tests.

pub mod app_state;
pub mod config;
pub mod telemetry;
pub mod workload;
