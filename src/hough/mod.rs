//! Hough accumulators consumed by the cleaner.
//!
//! Overview
//! - [`HoughSpace`] is the read-only vote grid the peak search works on.
//! - [`HoughTransform`] builds a grid from planar points. Each point votes
//!   once per angle bin, at the radius bin given by the transform's
//!   parameterisation.
//! - [`LinearHough`] uses the normal form of a line,
//!   `ρ = x·cosθ + y·sinθ`.
//! - [`CircularHough`] parameterises circles through the origin,
//!   `ρ = (x² + y²) / (2(x·cosθ + y·sinθ))`.

mod circular;
mod linear;
mod space;

pub use circular::CircularHough;
pub use linear::LinearHough;
pub use space::HoughSpace;

use nalgebra::Point2;
use std::f64::consts::PI;

/// Builds a [`HoughSpace`] from planar points.
pub trait HoughTransform {
    /// Number of bins along each accumulator axis.
    fn num_bins(&self) -> usize;

    /// Largest absolute radius represented by the accumulator.
    fn max_radius(&self) -> f64;

    /// Radius voted for by point `(x, y)` at the angle with the given cosine
    /// and sine. Non-finite values cast no vote.
    fn radius_for(&self, x: f64, y: f64, cos_t: f64, sin_t: f64) -> f64;

    fn find_hough_space(&self, points: &[Point2<f64>]) -> HoughSpace {
        let n = self.num_bins();
        let mut space = HoughSpace::new(n, self.max_radius());
        let trig: Vec<(f64, f64)> = (0..n)
            .map(|i| {
                let theta = i as f64 * PI / n as f64;
                (theta.cos(), theta.sin())
            })
            .collect();
        for p in points {
            for (angle_idx, &(cos_t, sin_t)) in trig.iter().enumerate() {
                let rad = self.radius_for(p.x, p.y, cos_t, sin_t);
                if let Some(radius_idx) = space.bin_from_radius(rad) {
                    space.add_vote(angle_idx, radius_idx, 1.0);
                }
            }
        }
        space
    }
}
