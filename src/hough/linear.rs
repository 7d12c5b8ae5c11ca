use super::HoughTransform;
use serde::{Deserialize, Serialize};

/// Straight-line Hough transform in normal form.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearHough {
    pub num_bins: usize,
    pub max_radius: f64,
}

impl LinearHough {
    pub fn new(num_bins: usize, max_radius: f64) -> Self {
        Self {
            num_bins,
            max_radius,
        }
    }
}

impl Default for LinearHough {
    fn default() -> Self {
        Self::new(500, 2000.0)
    }
}

impl HoughTransform for LinearHough {
    fn num_bins(&self) -> usize {
        self.num_bins
    }

    fn max_radius(&self) -> f64 {
        self.max_radius
    }

    #[inline]
    fn radius_for(&self, x: f64, y: f64, cos_t: f64, sin_t: f64) -> f64 {
        x * cos_t + y * sin_t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point2;

    #[test]
    fn collinear_points_share_a_cell() {
        // Horizontal line y = 10 → θ = π/2, ρ = 10.
        let pts: Vec<Point2<f64>> = (0..20).map(|i| Point2::new(i as f64, 10.0)).collect();
        let hough = LinearHough::new(40, 40.0);
        let space = hough.find_hough_space(&pts);

        let angle_bin = 20;
        let radius_bin = space.bin_from_radius(10.0).expect("in range");
        assert_eq!(space.value_at_bin(angle_bin, radius_bin), 20.0);

        let total: f64 = space.data().iter().sum();
        assert!(space.data().iter().all(|&v| v <= 20.0));
        assert!(total <= (20 * 40) as f64);
    }

    #[test]
    fn far_points_cast_no_votes() {
        let hough = LinearHough::new(8, 1.0);
        let space = hough.find_hough_space(&[Point2::new(100.0, 100.0)]);
        // Only angles where |ρ| < 1 can vote; near 3π/4 the projection is ~0.
        let votes: f64 = space.data().iter().sum();
        assert!(votes < 8.0);
    }
}
