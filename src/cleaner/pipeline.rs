//! End-to-end cleaner for one event.
//!
//! ```no_run
//! use hough_spiral_cleaner::{CleanerParams, HoughSpiralCleaner};
//! use nalgebra::{Point2, Point3};
//!
//! # fn main() -> Result<(), hough_spiral_cleaner::CleanerError> {
//! let cleaner = HoughSpiralCleaner::new(CleanerParams::default())?;
//! let xyz: Vec<Point3<f64>> = Vec::new();
//! let report = cleaner.process(&xyz, Point2::new(0.0, 0.0))?;
//! println!("kept {} of {} points", report.classification.num_assigned(), xyz.len());
//! # Ok(())
//! # }
//! ```

use super::params::CleanerParams;
use super::{angle, classify, radius, slice};
use crate::arclength::find_arc_length_xyz;
use crate::diagnostics::{CleanerReport, PeakSearchStage, TimingBreakdown};
use crate::error::{CleanerError, Result};
use crate::hough::{HoughSpace, HoughTransform};
use crate::types::{CandidateLine, ClassificationResult};
use log::debug;
use nalgebra::{Point2, Point3};

/// Classifies the points of a spiral track into line segments in
/// (z, arc length) space.
///
/// The cleaner holds only validated parameters; every call works on its own
/// inputs, so one instance can be shared across threads.
#[derive(Clone, Debug)]
pub struct HoughSpiralCleaner {
    params: CleanerParams,
}

impl HoughSpiralCleaner {
    pub fn new(params: CleanerParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &CleanerParams {
        &self.params
    }

    /// Arc length of each point about `center`.
    pub fn find_arc_length(&self, xyz: &[Point3<f64>], center: Point2<f64>) -> Vec<f64> {
        find_arc_length_xyz(xyz, center)
    }

    /// Linear Hough space over `(z, arc length)`.
    pub fn find_hough_space(&self, zs: &[f64], arclens: &[f64]) -> Result<HoughSpace> {
        if zs.len() != arclens.len() {
            return Err(CleanerError::InvalidInput(format!(
                "got {} z values but {} arc lengths",
                zs.len(),
                arclens.len()
            )));
        }
        let pts: Vec<Point2<f64>> = zs
            .iter()
            .zip(arclens)
            .map(|(&z, &s)| Point2::new(z, s))
            .collect();
        Ok(self.params.linear_hough.find_hough_space(&pts))
    }

    /// Circular Hough space of planar points, for callers estimating the
    /// rotation center.
    pub fn find_circular_hough_space(&self, xy: &[Point2<f64>]) -> HoughSpace {
        self.params.circular_hough.find_hough_space(xy)
    }

    pub fn find_max_angle_bin(&self, space: &HoughSpace) -> Result<usize> {
        angle::find_max_angle_bin(space, self.params.num_angle_bins_to_reduce)
    }

    pub fn find_max_angle_slice(&self, space: &HoughSpace, angle_bin: usize) -> Result<Vec<f64>> {
        slice::find_max_angle_slice(space, angle_bin, self.params.hough_space_slice_size)
    }

    pub fn find_peak_radius_bins(&self, profile: &[f64]) -> Result<Vec<f64>> {
        radius::find_peak_radius_bins(profile, self.params.peak_width, self.params.max_peaks)
    }

    /// Assigns points to the lines `radii` at `angle` (radians) and prunes
    /// sparse lines.
    pub fn classify_points(
        &self,
        xyz: &[Point3<f64>],
        arclens: &[f64],
        angle: f64,
        radii: &[f64],
    ) -> Result<ClassificationResult> {
        let zs: Vec<f64> = xyz.iter().map(|p| p.z).collect();
        classify::classify_points(&zs, arclens, angle, radii, self.params.min_points_per_line)
    }

    /// Runs the full pipeline on one event.
    pub fn process(&self, xyz: &[Point3<f64>], center: Point2<f64>) -> Result<CleanerReport> {
        let mut timings = TimingBreakdown::default();

        let arclens = timings.measure("arc_length", || self.find_arc_length(xyz, center));
        let zs: Vec<f64> = xyz.iter().map(|p| p.z).collect();
        let space = timings.measure("hough_space", || self.find_hough_space(&zs, &arclens))?;

        let angle_bin = timings.measure("angle_bin", || self.find_max_angle_bin(&space))?;
        let profile =
            timings.measure("angle_slice", || self.find_max_angle_slice(&space, angle_bin))?;
        let radius_bins = timings.measure("radius_peaks", || self.find_peak_radius_bins(&profile))?;

        let angle = space.angle_from_bin(angle_bin as f64);
        let candidates: Vec<CandidateLine> = radius_bins
            .iter()
            .map(|&bin| CandidateLine {
                radius: space.radius_from_bin(bin),
                angle,
            })
            .collect();
        debug!(
            "HoughSpiralCleaner::process angle_bin={} angle_deg={:.2} candidates={}",
            angle_bin,
            angle.to_degrees(),
            candidates.len()
        );

        let radii: Vec<f64> = candidates.iter().map(|c| c.radius).collect();
        let classification =
            timings.measure("classify", || self.classify_points(xyz, &arclens, angle, &radii))?;
        debug!(
            "HoughSpiralCleaner::process assigned {}/{} points",
            classification.num_assigned(),
            classification.len()
        );

        Ok(CleanerReport {
            classification,
            candidates,
            peak_search: PeakSearchStage {
                num_bins: space.num_bins(),
                angle_bin,
                radius_profile: profile,
                radius_bins,
            },
            min_points_per_line: self.params.min_points_per_line,
            timings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hough::{CircularHough, LinearHough};

    fn small_params() -> CleanerParams {
        CleanerParams {
            num_angle_bins_to_reduce: 1,
            hough_space_slice_size: 1,
            peak_width: 1,
            min_points_per_line: 1,
            linear_hough: LinearHough::new(20, 20.0),
            ..Default::default()
        }
    }

    #[test]
    fn invalid_params_are_rejected_at_construction() {
        let params = CleanerParams {
            hough_space_slice_size: 11,
            ..small_params()
        };
        assert!(matches!(
            HoughSpiralCleaner::new(params),
            Err(CleanerError::Configuration(_))
        ));
    }

    #[test]
    fn hough_space_rejects_mismatched_inputs() {
        let cleaner = HoughSpiralCleaner::new(small_params()).expect("params");
        assert!(cleaner.find_hough_space(&[1.0], &[]).is_err());
    }

    #[test]
    fn process_reports_stage_timings() {
        let cleaner = HoughSpiralCleaner::new(small_params()).expect("params");
        // Points along z at a constant arc length of sqrt(32)·π/4.
        let xyz: Vec<Point3<f64>> = (0..10)
            .map(|i| Point3::new(4.0, 4.0, i as f64 - 5.0))
            .collect();
        let report = cleaner.process(&xyz, Point2::new(0.0, 0.0)).expect("process");
        let labels: Vec<&str> = report.timings.stages.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["arc_length", "hough_space", "angle_bin", "angle_slice", "radius_peaks", "classify"]
        );
        assert_eq!(report.classification.len(), xyz.len());
        assert_eq!(report.peak_search.radius_profile.len(), 20);
        assert_eq!(report.min_points_per_line, 1);
    }

    #[test]
    fn classify_points_prunes_with_configured_minimum() {
        let cleaner = HoughSpiralCleaner::new(CleanerParams {
            min_points_per_line: 3,
            ..small_params()
        })
        .expect("params");
        // At angle π/2 the candidates are the horizontal lines s = 0 and s = 10.
        let xyz: Vec<Point3<f64>> = (0..5).map(|i| Point3::new(0.0, 0.0, i as f64)).collect();
        let arclens = [0.1, -0.1, 0.2, 9.9, 10.1];
        let res = cleaner
            .classify_points(&xyz, &arclens, std::f64::consts::FRAC_PI_2, &[0.0, 10.0])
            .expect("classify");
        assert_eq!(res.points_on_line(0), vec![0, 1, 2]);
        assert!(res.points_on_line(1).is_empty());
        assert_eq!(res.labels()[3], None);
        assert!(cleaner.classify_points(&xyz, &[0.0], 0.5, &[1.0]).is_err());
    }

    #[test]
    fn circular_space_uses_circular_parameters() {
        let cleaner = HoughSpiralCleaner::new(CleanerParams {
            circular_hough: CircularHough::new(40, 30.0),
            ..small_params()
        })
        .expect("params");
        // Points on the circle of radius 11 centered at (0, 11), which passes
        // through the origin.
        let xy: Vec<Point2<f64>> = (1..12)
            .map(|i| {
                let t = i as f64 * 0.5;
                Point2::new(11.0 * t.cos(), 11.0 + 11.0 * t.sin())
            })
            .collect();
        let space = cleaner.find_circular_hough_space(&xy);
        assert_eq!(space.num_bins(), 40);
        assert_eq!(space.max_radius(), 30.0);
        // At θ = π/2 every point votes for ρ = 11.
        let rho_bin = space.bin_from_radius(11.0).expect("in range");
        assert_eq!(space.value_at_bin(20, rho_bin), xy.len() as f64);
    }
}
