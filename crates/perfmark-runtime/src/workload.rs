//! Sample workload driven by the demo binary.
//!
//! Exercises each way of timing work: a manual start/end pair, a sync
//! closure, an async task, and an async task that fails.

use std::time::Duration;

use perfmark_core::error::{PerfmarkError, Result};

use crate::app_state::AppState;

pub const STARTUP: &str = "startup";
pub const CHECKSUM: &str = "checksum";
pub const WARMUP: &str = "warmup";
pub const FLAKY_FETCH: &str = "flaky_fetch";

pub async fn run(state: &AppState) -> Result<()> {
    let reg = state.registry();
    reg.start(STARTUP);

    let sum = reg.measure(CHECKSUM, || {
        (0..1_000_000u64).fold(0u64, |acc, x| acc.wrapping_add(x))
    });
    tracing::info!(sum, "checksum computed");

    let warmup = tokio::time::sleep(Duration::from_millis(20));
    reg.measure_async(WARMUP, warmup).await;

    let fetched = reg
        .measure_async(FLAKY_FETCH, async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            Err::<(), _>(PerfmarkError::Internal("upstream unavailable".into()))
        })
        .await;
    if let Err(e) = fetched {
        tracing::warn!(error = %e, "fetch failed");
    }

    if let Some(d) = reg.end(STARTUP) {
        tracing::info!(duration_ms = d, "workload finished");
    }
    Ok(())
}
