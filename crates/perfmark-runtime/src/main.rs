//! perfmark demo
//!
//! - Strict YAML config (optional path as first argument)
//! - Tracing subscriber driven by `RUST_LOG`
//! - Times a sample workload and prints the registry snapshot as JSON

use std::process::ExitCode;

use perfmark_runtime::{app_state, config, telemetry, workload};

#[tokio::main]
async fn main() -> ExitCode {
    telemetry::init();

    let cfg = match std::env::args().nth(1) {
        Some(path) => match config::load_from_file(&path) {
            Ok(cfg) => cfg,
            Err(e) => {
                let code = e.code().as_str();
                tracing::error!(code, error = %e, %path, "config load failed");
                return ExitCode::FAILURE;
            }
        },
        None => config::PerfmarkConfig::default(),
    };

    let state = app_state::AppState::new(cfg);
    let metrics_cfg = &state.cfg().metrics;
    tracing::info!(
        enabled = metrics_cfg.is_enabled(),
        slow_threshold_ms = metrics_cfg.slow_threshold_ms,
        "perfmark-demo starting"
    );

    if let Err(e) = workload::run(&state).await {
        tracing::error!(error = %e, "workload failed");
        return ExitCode::FAILURE;
    }

    match state.snapshot_json() {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "snapshot failed");
            ExitCode::FAILURE
        }
    }
}
