use crate::error::{CleanerError, Result};
use crate::types::ClassificationResult;
use log::debug;

/// Arc length on the line `z·cos(theta) + s·sin(theta) = rad` at drift
/// coordinate `z`.
#[inline]
fn hough_line(z: f64, rad: f64, theta: f64) -> f64 {
    (rad - z * theta.cos()) / theta.sin()
}

/// Assigns each point to the nearest candidate line and drops lines that end
/// with fewer than `min_points_per_line` points.
///
/// Candidates are visited in the order given. A point only moves to a later
/// line when its residual there is strictly smaller, so on ties the earlier
/// candidate keeps the point.
pub fn classify_points(
    zs: &[f64],
    arclens: &[f64],
    angle: f64,
    radii: &[f64],
    min_points_per_line: usize,
) -> Result<ClassificationResult> {
    classify_impl(zs, arclens, angle, radii, min_points_per_line, |_| {})
}

/// Like [`classify_points`], also returning a snapshot of the distances
/// after each candidate step (before pruning).
pub fn classify_points_with_trace(
    zs: &[f64],
    arclens: &[f64],
    angle: f64,
    radii: &[f64],
    min_points_per_line: usize,
) -> Result<(ClassificationResult, Vec<Vec<f64>>)> {
    let mut trace = Vec::with_capacity(radii.len());
    let result = classify_impl(zs, arclens, angle, radii, min_points_per_line, |res| {
        trace.push(res.distances().to_vec())
    })?;
    Ok((result, trace))
}

fn classify_impl<F>(
    zs: &[f64],
    arclens: &[f64],
    angle: f64,
    radii: &[f64],
    min_points_per_line: usize,
    mut on_step: F,
) -> Result<ClassificationResult>
where
    F: FnMut(&ClassificationResult),
{
    if zs.len() != arclens.len() {
        return Err(CleanerError::InvalidInput(format!(
            "got {} z values but {} arc lengths",
            zs.len(),
            arclens.len()
        )));
    }

    let mut result = ClassificationResult::unassigned(zs.len());
    let mut points_per_line = vec![0usize; radii.len()];

    for (line_idx, &rad) in radii.iter().enumerate() {
        for (point_idx, (&z, &s)) in zs.iter().zip(arclens).enumerate() {
            let new_dist = (hough_line(z, rad, angle) - s).abs();
            if new_dist < result.distances()[point_idx] {
                if let Some(old_line) = result.labels()[point_idx] {
                    points_per_line[old_line] -= 1;
                }
                points_per_line[line_idx] += 1;
                result.assign(point_idx, line_idx, new_dist);
            }
        }
        on_step(&result);
    }

    for (line_idx, &count) in points_per_line.iter().enumerate() {
        if count >= min_points_per_line {
            continue;
        }
        debug!(
            "classify: dropping line {} with {} points (< {})",
            line_idx, count, min_points_per_line
        );
        for point_idx in 0..result.len() {
            if result.labels()[point_idx] == Some(line_idx) {
                result.reset(point_idx);
            }
        }
    }

    Ok(result)
}
