use crate::diagnostics::TimingBreakdown;
use crate::types::{CandidateLine, ClassificationResult};
use serde::Serialize;

/// Intermediate values of the two-stage peak search.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeakSearchStage {
    pub num_bins: usize,
    pub angle_bin: usize,
    /// Summed radius profile of the angular slice around `angle_bin`.
    pub radius_profile: Vec<f64>,
    /// Refined (fractional) radius bins in descending peak order.
    pub radius_bins: Vec<f64>,
}

/// Per-line outcome after pruning.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSummary {
    pub line: CandidateLine,
    pub num_points: usize,
    pub kept: bool,
}

/// Result produced by [`HoughSpiralCleaner::process`](crate::HoughSpiralCleaner).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanerReport {
    pub classification: ClassificationResult,
    pub candidates: Vec<CandidateLine>,
    pub peak_search: PeakSearchStage,
    /// Threshold below which a line's points were released.
    pub min_points_per_line: usize,
    pub timings: TimingBreakdown,
}

impl CleanerReport {
    /// Candidate lines with the number of points they kept. A line is kept
    /// when it survived pruning, even if it attracted no points.
    pub fn line_summaries(&self) -> Vec<LineSummary> {
        self.candidates
            .iter()
            .enumerate()
            .map(|(idx, line)| {
                let num_points = self.classification.points_on_line(idx).len();
                LineSummary {
                    line: *line,
                    num_points,
                    kept: num_points >= self.min_points_per_line,
                }
            })
            .collect()
    }

    pub fn num_kept_lines(&self) -> usize {
        self.line_summaries().iter().filter(|s| s.kept).count()
    }
}
