use serde::Serialize;

/// One named measurement window.
///
/// `end_time` and `duration` are set together by [`Metric::finish`]; a metric
/// with a duration always has an end time no earlier than its start.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    name: String,
    start_time: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration: Option<f64>,
}

impl Metric {
    /// New pending window.
    pub fn started(name: impl Into<String>, start_time: f64) -> Self {
        Self {
            name: name.into(),
            start_time,
            end_time: None,
            duration: None,
        }
    }

    /// Close the window at `now` and return the elapsed ms.
    ///
    /// A clock reading earlier than the start is clamped to the start.
    pub fn finish(&mut self, now: f64) -> f64 {
        let end = now.max(self.start_time);
        let duration = end - self.start_time;
        self.end_time = Some(end);
        self.duration = Some(duration);
        duration
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    pub fn end_time(&self) -> Option<f64> {
        self.end_time
    }

    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    pub fn is_pending(&self) -> bool {
        self.duration.is_none()
    }

    pub fn is_completed(&self) -> bool {
        self.duration.is_some()
    }
}
