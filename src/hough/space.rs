use crate::error::{CleanerError, Result};
use nalgebra::{DMatrix, DMatrixView};
use std::f64::consts::PI;

/// Square vote accumulator over (angle bin, radius bin).
///
/// Rows index angle bins spanning `[0, π)`, columns index radius bins
/// spanning `[-max_radius, max_radius)`. Cell values are non-negative vote
/// weights.
#[derive(Clone, Debug, PartialEq)]
pub struct HoughSpace {
    data: DMatrix<f64>,
    max_radius: f64,
}

impl HoughSpace {
    /// Creates an empty accumulator with `num_bins × num_bins` cells.
    pub fn new(num_bins: usize, max_radius: f64) -> Self {
        Self {
            data: DMatrix::zeros(num_bins, num_bins),
            max_radius,
        }
    }

    /// Wraps an existing vote grid. The grid must be square with finite,
    /// non-negative cells.
    pub fn from_matrix(data: DMatrix<f64>, max_radius: f64) -> Result<Self> {
        if data.nrows() != data.ncols() {
            return Err(CleanerError::InvalidInput(format!(
                "hough space must be square, got {}x{}",
                data.nrows(),
                data.ncols()
            )));
        }
        if let Some(bad) = data.iter().find(|v| !v.is_finite() || **v < 0.0) {
            return Err(CleanerError::InvalidInput(format!(
                "hough space cells must be finite and non-negative, got {bad}"
            )));
        }
        Ok(Self { data, max_radius })
    }

    #[inline]
    pub fn num_bins(&self) -> usize {
        self.data.nrows()
    }

    #[inline]
    pub fn max_radius(&self) -> f64 {
        self.max_radius
    }

    /// Vote weight at the given cell. Panics when either index is out of range.
    #[inline]
    pub fn value_at_bin(&self, angle_idx: usize, radius_idx: usize) -> f64 {
        self.data[(angle_idx, radius_idx)]
    }

    /// Borrowed block of `count` consecutive angle rows starting at `start`,
    /// indexed `[angle offset, radius bin]`.
    pub fn angular_slice(&self, start: isize, count: usize) -> Result<DMatrixView<'_, f64>> {
        let n = self.num_bins();
        let fits = start >= 0 && (start as usize).checked_add(count).is_some_and(|end| end <= n);
        if !fits {
            return Err(CleanerError::OutOfRange {
                start,
                count,
                num_bins: n,
            });
        }
        Ok(self.data.view((start as usize, 0), (count, n)))
    }

    /// Angle in radians at a (possibly fractional) angle bin.
    #[inline]
    pub fn angle_from_bin(&self, bin: f64) -> f64 {
        bin * PI / self.num_bins() as f64
    }

    /// Radius at a (possibly fractional) radius bin, measured at bin
    /// centers: integer bin `b` maps to the middle of the interval that
    /// [`bin_from_radius`](Self::bin_from_radius) files under `b`.
    #[inline]
    pub fn radius_from_bin(&self, bin: f64) -> f64 {
        (bin + 0.5) * 2.0 * self.max_radius / self.num_bins() as f64 - self.max_radius
    }

    /// Radius bin holding `rad`, or `None` outside `[-max_radius, max_radius)`.
    pub fn bin_from_radius(&self, rad: f64) -> Option<usize> {
        if !rad.is_finite() {
            return None;
        }
        let n = self.num_bins();
        let pos = ((rad + self.max_radius) * n as f64 / (2.0 * self.max_radius)).floor();
        if pos < 0.0 || pos >= n as f64 {
            return None;
        }
        Some(pos as usize)
    }

    pub fn data(&self) -> &DMatrix<f64> {
        &self.data
    }

    pub(crate) fn add_vote(&mut self, angle_idx: usize, radius_idx: usize, weight: f64) {
        self.data[(angle_idx, radius_idx)] += weight.max(0.0);
    }
}
