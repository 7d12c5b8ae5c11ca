use crate::error::{CleanerError, Result};
use crate::hough::HoughSpace;

/// Sums the angle rows `[center - half_width, center + half_width)` into a
/// per-radius-bin vote profile of length `num_bins`.
pub fn find_max_angle_slice(
    space: &HoughSpace,
    center: usize,
    half_width: usize,
) -> Result<Vec<f64>> {
    let n = space.num_bins();
    let start = center as isize - half_width as isize;
    let count = 2 * half_width;
    if start < 0 || center + half_width > n {
        return Err(CleanerError::OutOfRange {
            start,
            count,
            num_bins: n,
        });
    }
    let block = space.angular_slice(start, count)?;
    Ok(block.row_sum().iter().copied().collect())
}
