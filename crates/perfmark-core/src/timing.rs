//! Wrapping a unit of work in a timing window.
//!
//! Every helper here is built on [`MetricGuard`], which closes its window
//! exactly once: on `finish()`, or on drop. Drop covers early returns,
//! unwinding panics, and async futures cancelled mid-flight.

use std::future::Future;

use crate::registry::Registry;

/// Open timing window that ends when finished or dropped.
#[must_use = "the window closes as soon as the guard is dropped"]
pub struct MetricGuard<'a> {
    registry: &'a Registry,
    name: String,
    open: bool,
}

impl<'a> MetricGuard<'a> {
    fn new(registry: &'a Registry, name: &str) -> Self {
        registry.start(name);
        Self {
            registry,
            name: name.to_string(),
            open: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Close now and return the duration, if one was recorded.
    pub fn finish(mut self) -> Option<f64> {
        self.close()
    }

    fn close(&mut self) -> Option<f64> {
        if !std::mem::replace(&mut self.open, false) {
            return None;
        }
        self.registry.end(&self.name)
    }
}

impl Drop for MetricGuard<'_> {
    fn drop(&mut self) {
        let _ = self.close();
    }
}

impl Registry {
    /// Start `name` and hand back a guard that ends it.
    pub fn guard(&self, name: &str) -> MetricGuard<'_> {
        MetricGuard::new(self, name)
    }

    /// Time `op` under `name`.
    ///
    /// The operation's output comes back untouched, so an `Err` from a
    /// fallible operation is returned as-is after the window is closed.
    pub fn measure<R>(&self, name: &str, op: impl FnOnce() -> R) -> R {
        let guard = self.guard(name);
        let out = op();
        guard.finish();
        out
    }

    /// Async counterpart of [`Registry::measure`].
    pub async fn measure_async<F>(&self, name: &str, fut: F) -> F::Output
    where
        F: Future,
    {
        let guard = self.guard(name);
        let out = fut.await;
        guard.finish();
        out
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
#[allow(clippy::panic)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::clock::ManualClock;

    fn registry_at(clock: &Arc<ManualClock>) -> Registry {
        Registry::builder()
            .enabled(true)
            .clock(clock.clone())
            .build()
    }

    #[test]
    fn measure_returns_value_and_records() {
        let clock = Arc::new(ManualClock::at(0.0));
        let reg = registry_at(&clock);

        let v = reg.measure("sum", || {
            clock.advance_ms(12.0);
            2 + 2
        });
        assert_eq!(v, 4);
        assert_eq!(reg.duration("sum"), Some(12.0));
    }

    #[test]
    fn measure_passes_error_through() {
        let clock = Arc::new(ManualClock::at(0.0));
        let reg = registry_at(&clock);

        let res: Result<(), String> = reg.measure("op", || {
            clock.advance_ms(3.0);
            Err("boom".to_string())
        });
        assert_eq!(res, Err("boom".to_string()));
        assert_eq!(reg.duration("op"), Some(3.0));
    }

    #[test]
    fn guard_closes_on_drop() {
        let clock = Arc::new(ManualClock::at(0.0));
        let reg = registry_at(&clock);
        {
            let g = reg.guard("scope");
            assert_eq!(g.name(), "scope");
            clock.advance_ms(7.0);
        }
        assert_eq!(reg.duration("scope"), Some(7.0));
    }

    #[test]
    fn guard_finish_ends_once() {
        let clock = Arc::new(ManualClock::at(0.0));
        let reg = registry_at(&clock);

        let g = reg.guard("once");
        clock.advance_ms(2.0);
        assert_eq!(g.finish(), Some(2.0));

        clock.advance_ms(50.0);
        assert_eq!(reg.duration("once"), Some(2.0));
    }

    #[test]
    fn measure_closes_on_panic() {
        let clock = Arc::new(ManualClock::at(0.0));
        let reg = registry_at(&clock);

        let caught = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            reg.measure("explodes", || {
                clock.advance_ms(4.0);
                panic!("inner failure");
            })
        }));
        assert!(caught.is_err());
        assert_eq!(reg.duration("explodes"), Some(4.0));
    }

    #[test]
    fn disabled_measure_still_runs_op() {
        let reg = Registry::builder().enabled(false).build();
        assert_eq!(reg.measure("off", || "ran"), "ran");
        assert!(reg.is_empty());
    }

    #[tokio::test]
    async fn measure_async_records() {
        let clock = Arc::new(ManualClock::at(0.0));
        let reg = registry_at(&clock);

        let c = clock.clone();
        let out = reg
            .measure_async("fetch", async move {
                tokio::task::yield_now().await;
                c.advance_ms(1500.0);
                "payload"
            })
            .await;
        assert_eq!(out, "payload");
        assert_eq!(reg.duration("fetch"), Some(1500.0));
    }

    #[tokio::test]
    async fn measure_async_passes_error_through() {
        let clock = Arc::new(ManualClock::at(0.0));
        let reg = registry_at(&clock);

        let res: Result<u32, std::io::Error> = reg
            .measure_async("io", async {
                Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"))
            })
            .await;
        let err = res.unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
        assert_eq!(err.to_string(), "missing");
        assert!(reg.duration("io").is_some());
    }

    #[tokio::test]
    async fn dropped_future_closes_window() {
        let clock = Arc::new(ManualClock::at(0.0));
        let reg = registry_at(&clock);

        let stalled = std::future::pending::<()>();
        let mut fut = Box::pin(reg.measure_async("stalled", stalled));
        let res = tokio::time::timeout(Duration::from_millis(5), &mut fut).await;
        assert!(res.is_err());
        assert!(reg.get("stalled").unwrap().is_pending());

        clock.advance_ms(9.0);
        drop(fut);
        assert_eq!(reg.duration("stalled"), Some(9.0));
    }
}
