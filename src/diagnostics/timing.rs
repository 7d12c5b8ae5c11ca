use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Wall-clock cost of one cleaner stage.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

/// Per-stage timings of one processed event.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    /// Runs `stage`, recording its elapsed time under `label`.
    pub fn measure<T>(&mut self, label: &str, stage: impl FnOnce() -> T) -> T {
        let t0 = Instant::now();
        let out = stage();
        let elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0;
        self.total_ms += elapsed_ms;
        self.stages.push(StageTiming {
            label: label.to_string(),
            elapsed_ms,
        });
        out
    }

    pub fn stage_ms(&self, label: &str) -> Option<f64> {
        self.stages
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.elapsed_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_records_stages_in_order() {
        let mut timings = TimingBreakdown::default();
        let v = timings.measure("first", || 2 + 2);
        timings.measure("second", || ());
        assert_eq!(v, 4);
        let labels: Vec<&str> = timings.stages.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["first", "second"]);
        assert!(timings.stage_ms("first").is_some());
        assert!(timings.stage_ms("missing").is_none());
        assert!(timings.total_ms >= 0.0);
    }
}
