//! Config loader (strict parsing).

pub mod schema;

use std::fs;

use perfmark_core::error::{PerfmarkError, Result};

pub use schema::{MetricsSection, PerfmarkConfig};

/// Read and validate a YAML config file. IO failures map to `Internal`.
pub fn load_from_file(path: &str) -> Result<PerfmarkConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| PerfmarkError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

/// Parse and validate YAML.
///
/// Unknown fields and malformed YAML are `BadConfig`, a `version` other than 1
/// is `UnsupportedVersion`, and `metrics.slow_threshold_ms` must be finite and
/// within `(0, 3600000]`.
pub fn load_from_str(s: &str) -> Result<PerfmarkConfig> {
    let cfg: PerfmarkConfig = serde_yaml::from_str(s)
        .map_err(|e| PerfmarkError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
