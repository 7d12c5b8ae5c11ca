//! Parameter types configuring the cleaner stages.
//!
//! Defaults target AT-TPC sized events (a few thousand points, drift
//! coordinate in millimetres). When tuning, start with the linear Hough
//! binning and `min_points_per_line`.

use crate::error::{CleanerError, Result};
use crate::hough::{CircularHough, LinearHough};
use serde::{Deserialize, Serialize};

/// Cleaner-wide parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanerParams {
    /// Number of highest-voted cells averaged to pick the dominant angle (K).
    pub num_angle_bins_to_reduce: usize,
    /// Half-width of the angle window summed into the radius profile (S).
    pub hough_space_slice_size: usize,
    /// Half-width of the centroid window around each radius peak (W).
    pub peak_width: usize,
    /// Maximum number of radius peaks turned into candidate lines.
    pub max_peaks: usize,
    /// Lines ending with fewer points than this are dropped.
    pub min_points_per_line: usize,
    /// Accumulator over (z, arc length).
    pub linear_hough: LinearHough,
    /// Accumulator for circles through the origin.
    pub circular_hough: CircularHough,
}

impl Default for CleanerParams {
    fn default() -> Self {
        Self {
            num_angle_bins_to_reduce: 10,
            hough_space_slice_size: 5,
            peak_width: 2,
            max_peaks: 2,
            min_points_per_line: 40,
            linear_hough: LinearHough::default(),
            circular_hough: CircularHough::default(),
        }
    }
}

impl CleanerParams {
    /// Checks every knob against the accumulator sizes.
    pub fn validate(&self) -> Result<()> {
        check_hough("linear_hough", self.linear_hough.num_bins, self.linear_hough.max_radius)?;
        check_hough(
            "circular_hough",
            self.circular_hough.num_bins,
            self.circular_hough.max_radius,
        )?;

        let n = self.linear_hough.num_bins;
        let cells = n.saturating_mul(n);
        if self.num_angle_bins_to_reduce == 0 || self.num_angle_bins_to_reduce > cells {
            return Err(CleanerError::Configuration(format!(
                "num_angle_bins_to_reduce must be in 1..={cells}, got {}",
                self.num_angle_bins_to_reduce
            )));
        }
        let s = self.hough_space_slice_size;
        if s == 0 || s.saturating_mul(2) > n {
            return Err(CleanerError::Configuration(format!(
                "hough_space_slice_size must satisfy 0 < 2*S <= {n}, got {s}"
            )));
        }
        if self.peak_width >= n {
            return Err(CleanerError::Configuration(format!(
                "peak_width must be < {n}, got {}",
                self.peak_width
            )));
        }
        if self.max_peaks == 0 {
            return Err(CleanerError::Configuration(
                "max_peaks must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

fn check_hough(name: &str, num_bins: usize, max_radius: f64) -> Result<()> {
    if num_bins == 0 {
        return Err(CleanerError::Configuration(format!(
            "{name}.num_bins must be positive"
        )));
    }
    if !(max_radius.is_finite() && max_radius > 0.0) {
        return Err(CleanerError::Configuration(format!(
            "{name}.max_radius must be positive and finite, got {max_radius}"
        )));
    }
    Ok(())
}
