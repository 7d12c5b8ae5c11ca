use nalgebra::Point3;

/// Radius at which synthetic points are placed around the origin.
pub const RING_RADIUS: f64 = 100.0;

/// Generates points whose arc length about the origin follows
/// `s = slope * z + offset` for every `z` in `zs`.
///
/// Points are placed on a circle of [`RING_RADIUS`] so that `atan(y/x)`
/// recovers the intended angle exactly; `|s|` must stay below
/// `RING_RADIUS * π/2`.
pub fn line_event(slope: f64, offset: f64, zs: &[f64]) -> Vec<Point3<f64>> {
    zs.iter()
        .map(|&z| {
            let s = slope * z + offset;
            let theta = s / RING_RADIUS;
            Point3::new(RING_RADIUS * theta.cos(), RING_RADIUS * theta.sin(), z)
        })
        .collect()
}

/// Evenly spaced drift coordinates `start, start + step, ...` (`count` values).
pub fn drift_range(start: f64, step: f64, count: usize) -> Vec<f64> {
    (0..count).map(|i| start + step * i as f64).collect()
}
