use crate::error::{CleanerError, Result};
use crate::peaks::find_peak_locations;

/// Locates up to `max_peaks` radius peaks in `profile` and refines each one
/// to the vote-weighted centroid of the window
/// `[max(0, p - width), min(len - 1, p + width)]`.
///
/// Centroids are returned in descending peak-magnitude order. A window with
/// zero total weight yields [`CleanerError::NoPeak`].
pub fn find_peak_radius_bins(profile: &[f64], width: usize, max_peaks: usize) -> Result<Vec<f64>> {
    if profile.is_empty() {
        return Ok(Vec::new());
    }
    let last = profile.len() - 1;
    find_peak_locations(profile, max_peaks)
        .into_iter()
        .map(|peak| {
            let first = peak.saturating_sub(width);
            let end = peak.saturating_add(width).min(last);
            centroid(profile, first, end).ok_or(CleanerError::NoPeak { peak_bin: peak })
        })
        .collect()
}

/// Weighted mean position over `profile[first..=last]`, `None` when the
/// window carries no weight.
fn centroid(profile: &[f64], first: usize, last: usize) -> Option<f64> {
    let (weighted, total) = profile[first..=last]
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(sw, s), (offset, &v)| {
            (sw + (first + offset) as f64 * v, s + v)
        });
    if total == 0.0 || !total.is_finite() {
        return None;
    }
    Some(weighted / total)
}
