#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use perfmark_runtime::{app_state::AppState, config, workload};

#[tokio::test]
async fn workload_closes_every_window() {
    let cfg = config::load_from_str("version: 1\nmetrics: { enabled: true }\n").unwrap();
    let state = AppState::new(cfg);

    workload::run(&state).await.unwrap();

    let names: Vec<_> = state
        .snapshot()
        .iter()
        .map(|m| m.name().to_string())
        .collect();
    let expected = [
        workload::CHECKSUM,
        workload::FLAKY_FETCH,
        workload::STARTUP,
        workload::WARMUP,
    ];
    assert_eq!(names, expected);
    for m in state.snapshot() {
        assert!(m.is_completed(), "{} left pending", m.name());
    }

    let reg = state.registry();
    assert!(reg.duration(workload::WARMUP).unwrap() >= 20.0);
    assert!(reg.duration(workload::FLAKY_FETCH).unwrap() >= 10.0);
}

#[tokio::test]
async fn disabled_workload_leaves_registry_empty() {
    let cfg = config::load_from_str("version: 1\nmetrics: { enabled: false }\n").unwrap();
    let state = AppState::new(cfg);

    workload::run(&state).await.unwrap();
    assert!(state.snapshot().is_empty());
    assert_eq!(state.snapshot_json().unwrap(), "[]");
}
