//! Local-maximum search over 1D vote profiles.

use std::cmp::Ordering;

/// Returns up to `max_peaks` local-maximum positions of `values`, ordered
/// by descending magnitude.
///
/// A position is a local maximum when it is strictly greater than its left
/// neighbour and not smaller than its right one, so a flat plateau reports
/// its first sample. Array ends count as maxima when they beat their single
/// neighbour. Zero or non-finite samples are never peaks. Equal magnitudes
/// keep ascending position order.
pub fn find_peak_locations(values: &[f64], max_peaks: usize) -> Vec<usize> {
    let n = values.len();
    let mut peaks: Vec<usize> = (0..n)
        .filter(|&i| {
            let v = values[i];
            if !v.is_finite() || v <= 0.0 {
                return false;
            }
            let left_ok = i == 0 || v > values[i - 1];
            let right_ok = i + 1 == n || v >= values[i + 1];
            left_ok && right_ok
        })
        .collect();
    // Stable sort keeps lower positions first on ties.
    peaks.sort_by(|&a, &b| {
        values[b]
            .partial_cmp(&values[a])
            .unwrap_or(Ordering::Equal)
    });
    peaks.truncate(max_peaks);
    peaks
}
