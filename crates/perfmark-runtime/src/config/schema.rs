use std::sync::Arc;

use perfmark_core::error::{PerfmarkError, Result};
use perfmark_core::{validate_slow_threshold, Clock, Registry, RegistryBuilder};
use perfmark_core::{DEFAULT_ENABLED, DEFAULT_SLOW_THRESHOLD_MS};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PerfmarkConfig {
    pub version: u32,

    #[serde(default)]
    pub metrics: MetricsSection,
}

impl PerfmarkConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(PerfmarkError::UnsupportedVersion);
        }
        self.metrics.validate()
    }
}

impl Default for PerfmarkConfig {
    fn default() -> Self {
        Self {
            version: 1,
            metrics: MetricsSection::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricsSection {
    /// Absent means "follow the build profile".
    #[serde(default)]
    pub enabled: Option<bool>,

    #[serde(default = "default_slow_threshold_ms")]
    pub slow_threshold_ms: f64,
}

impl Default for MetricsSection {
    fn default() -> Self {
        Self {
            enabled: None,
            slow_threshold_ms: default_slow_threshold_ms(),
        }
    }
}

impl MetricsSection {
    pub fn validate(&self) -> Result<()> {
        validate_slow_threshold(self.slow_threshold_ms)
            .map_err(|e| PerfmarkError::BadConfig(format!("metrics.{e}")))
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(DEFAULT_ENABLED)
    }

    pub fn build_registry(&self) -> Registry {
        self.registry_builder().build()
    }

    /// Same as [`MetricsSection::build_registry`] with an injected clock.
    pub fn build_registry_with_clock(&self, clock: Arc<dyn Clock>) -> Registry {
        self.registry_builder().clock(clock).build()
    }

    fn registry_builder(&self) -> RegistryBuilder {
        Registry::builder()
            .enabled(self.is_enabled())
            .slow_threshold_ms(self.slow_threshold_ms)
    }
}

fn default_slow_threshold_ms() -> f64 {
    DEFAULT_SLOW_THRESHOLD_MS
}
