use super::HoughTransform;
use serde::{Deserialize, Serialize};

/// Hough transform for circles passing through the origin.
///
/// A circle through the origin with center `ρ·(cosθ, sinθ)` contains
/// `(x, y)` exactly when `x² + y² = 2ρ(x·cosθ + y·sinθ)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CircularHough {
    pub num_bins: usize,
    pub max_radius: f64,
}

impl CircularHough {
    pub fn new(num_bins: usize, max_radius: f64) -> Self {
        Self {
            num_bins,
            max_radius,
        }
    }
}

impl Default for CircularHough {
    fn default() -> Self {
        Self::new(500, 500.0)
    }
}

impl HoughTransform for CircularHough {
    fn num_bins(&self) -> usize {
        self.num_bins
    }

    fn max_radius(&self) -> f64 {
        self.max_radius
    }

    #[inline]
    fn radius_for(&self, x: f64, y: f64, cos_t: f64, sin_t: f64) -> f64 {
        (x * x + y * y) / (2.0 * (x * cos_t + y * sin_t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point2;
    use std::f64::consts::PI;

    #[test]
    fn circle_through_origin_peaks_at_its_center() {
        // Circle of radius 11 centered on (0, 11): θ = π/2, ρ = 11.
        let pts: Vec<Point2<f64>> = (1..24)
            .map(|i| {
                let phi = i as f64 * 2.0 * PI / 24.0 - PI / 2.0;
                Point2::new(11.0 * phi.cos(), 11.0 + 11.0 * phi.sin())
            })
            .collect();
        let hough = CircularHough::new(36, 36.0);
        let space = hough.find_hough_space(&pts);

        let mut best = (0, 0);
        let mut best_val = f64::MIN;
        for a in 0..space.num_bins() {
            for r in 0..space.num_bins() {
                if space.value_at_bin(a, r) > best_val {
                    best_val = space.value_at_bin(a, r);
                    best = (a, r);
                }
            }
        }
        assert_eq!(best.0, 18);
        assert_eq!(Some(best.1), space.bin_from_radius(11.0));
    }

    #[test]
    fn origin_casts_no_vote() {
        let hough = CircularHough::new(10, 5.0);
        let space = hough.find_hough_space(&[Point2::new(0.0, 0.0)]);
        assert_eq!(space.data().iter().sum::<f64>(), 0.0);
    }
}
