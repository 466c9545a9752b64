//! Shared application state.
//!
//! Owns the config and the one [`Registry`] for this process. Cloning is
//! cheap; every clone points at the same registry.

use std::sync::Arc;

use perfmark_core::error::{PerfmarkError, Result};
use perfmark_core::{Metric, Registry};

use crate::config::PerfmarkConfig;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    registry: Arc<Registry>,
}

struct AppStateInner {
    cfg: PerfmarkConfig,
}

impl AppState {
    pub fn new(cfg: PerfmarkConfig) -> Self {
        let registry = Arc::new(cfg.metrics.build_registry());

        Self {
            inner: Arc::new(AppStateInner { cfg }),
            registry,
        }
    }

    /// Config the registry was built from.
    pub fn cfg(&self) -> &PerfmarkConfig {
        &self.inner.cfg
    }

    pub fn registry(&self) -> Arc<Registry> {
        Arc::clone(&self.registry)
    }

    /// Metrics sorted by name, for stable output.
    pub fn snapshot(&self) -> Vec<Metric> {
        let mut metrics = self.registry.all_metrics();
        metrics.sort_by(|a, b| a.name().cmp(b.name()));
        metrics
    }

    /// Snapshot rendered as pretty JSON.
    pub fn snapshot_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| PerfmarkError::Internal(format!("encode snapshot failed: {e}")))
    }
}
