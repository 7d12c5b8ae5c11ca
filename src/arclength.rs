//! Arc-length transform that unrolls a spiral around a known center.
//!
//! Each planar point is mapped to `r·θ`, where `r` is its distance to the
//! center and `θ = atan(Δy/Δx)`. Plotted against `z`, points on one spiral
//! turn then fall close to a straight line, which the linear Hough stage can
//! pick up.
//!
//! `θ` deliberately uses the single-argument arctangent, so it folds onto
//! `(-π/2, π/2)`. Callers must keep the geometry inside that domain; points
//! with `Δx ≈ 0` are unstable.

use nalgebra::{Point2, Point3};

/// Computes the arc length of each planar point about `center`.
pub fn find_arc_length(xy: &[Point2<f64>], center: Point2<f64>) -> Vec<f64> {
    xy.iter().map(|p| arc_length(p.x, p.y, center)).collect()
}

/// Same as [`find_arc_length`] for 3D points, ignoring `z`.
pub fn find_arc_length_xyz(xyz: &[Point3<f64>], center: Point2<f64>) -> Vec<f64> {
    xyz.iter().map(|p| arc_length(p.x, p.y, center)).collect()
}

#[inline]
fn arc_length(x: f64, y: f64, center: Point2<f64>) -> f64 {
    let dx = x - center.x;
    let dy = y - center.y;
    let rad = (dx * dx + dy * dy).sqrt();
    let theta = (dy / dx).atan();
    rad * theta
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn arc_length_on_diagonal() {
        let pts = [Point2::new(1.0, 1.0), Point2::new(3.0, 3.0)];
        let out = find_arc_length(&pts, Point2::new(0.0, 0.0));
        assert_abs_diff_eq!(out[0], 2f64.sqrt() * FRAC_PI_4, epsilon = 1e-12);
        assert_abs_diff_eq!(out[1], 18f64.sqrt() * FRAC_PI_4, epsilon = 1e-12);
    }

    #[test]
    fn arc_length_uses_offset_center() {
        let pts = [Point2::new(12.0, 5.0)];
        let out = find_arc_length(&pts, Point2::new(10.0, 5.0));
        assert_abs_diff_eq!(out[0], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn atan_folds_opposite_quadrants() {
        // Not a four-quadrant angle: (-1, -1) maps like (1, 1).
        let c = Point2::new(0.0, 0.0);
        let a = find_arc_length(&[Point2::new(1.0, 1.0)], c)[0];
        let b = find_arc_length(&[Point2::new(-1.0, -1.0)], c)[0];
        assert_abs_diff_eq!(a, b, epsilon = 1e-12);
    }

    #[test]
    fn xyz_variant_ignores_z() {
        let c = Point2::new(0.0, 0.0);
        let flat = find_arc_length(&[Point2::new(2.0, 1.0)], c);
        let lifted = find_arc_length_xyz(&[Point3::new(2.0, 1.0, 99.0)], c);
        assert_eq!(flat, lifted);
    }
}
