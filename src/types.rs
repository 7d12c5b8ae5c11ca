use serde::Serialize;

/// A candidate line in (z, arc length) space, in normal form
/// `z·cos(angle) + s·sin(angle) = radius`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CandidateLine {
    pub radius: f64,
    pub angle: f64,
}

/// Per-point assignment of an event to candidate lines.
///
/// `labels[i]` is `None` (unassigned) exactly when `distances[i]` is
/// infinite. The result is only built by the classifier and is read-only
/// afterwards.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClassificationResult {
    labels: Vec<Option<usize>>,
    distances: Vec<f64>,
}

impl ClassificationResult {
    pub(crate) fn unassigned(num_points: usize) -> Self {
        Self {
            labels: vec![None; num_points],
            distances: vec![f64::INFINITY; num_points],
        }
    }

    pub(crate) fn assign(&mut self, point: usize, line: usize, distance: f64) {
        self.labels[point] = Some(line);
        self.distances[point] = distance;
    }

    pub(crate) fn reset(&mut self, point: usize) {
        self.labels[point] = None;
        self.distances[point] = f64::INFINITY;
    }

    pub fn labels(&self) -> &[Option<usize>] {
        &self.labels
    }

    /// Residual distance of each point to its line, `+∞` when unassigned.
    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn num_assigned(&self) -> usize {
        self.labels.iter().filter(|l| l.is_some()).count()
    }

    /// Indices of the points carrying `line`.
    pub fn points_on_line(&self, line: usize) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter_map(|(i, l)| (*l == Some(line)).then_some(i))
            .collect()
    }
}
