//! Top-level facade crate for perfmark.
//!
//! Re-exports the core registry and the runtime wiring so users can depend on a single crate.

pub use perfmark_core::{Clock, Metric, MetricGuard, Registry, RegistryBuilder};

pub mod core {
    pub use perfmark_core::*;
}

pub mod runtime {
    pub use perfmark_runtime::*;
}
