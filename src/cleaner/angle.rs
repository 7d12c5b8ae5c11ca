use crate::error::{CleanerError, Result};
use crate::hough::HoughSpace;
use std::cmp::Ordering;

/// Picks the dominant angle bin as the floored mean position of the `k`
/// highest-voted cells.
///
/// Cells are stable-sorted by vote so equal votes keep row-major order.
/// Averaging several cells is less sensitive to vote noise around the true
/// peak than a single argmax.
pub fn find_max_angle_bin(space: &HoughSpace, k: usize) -> Result<usize> {
    let n = space.num_bins();
    let cells = n * n;
    if k == 0 || k > cells {
        return Err(CleanerError::Configuration(format!(
            "number of bins to average must be in 1..={cells}, got {k}"
        )));
    }

    let mut indices: Vec<(usize, usize)> = Vec::with_capacity(cells);
    for a in 0..n {
        for r in 0..n {
            indices.push((a, r));
        }
    }
    indices.sort_by(|&(a0, r0), &(a1, r1)| {
        space
            .value_at_bin(a0, r0)
            .partial_cmp(&space.value_at_bin(a1, r1))
            .unwrap_or(Ordering::Equal)
    });

    let (angle_total, _radius_total) = indices[cells - k..]
        .iter()
        .fold((0usize, 0usize), |(sa, sr), &(a, r)| (sa + a, sr + r));
    // Integer division floors the non-negative mean.
    Ok(angle_total / k)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::DMatrix;

    fn space_with(cells: &[((usize, usize), f64)], n: usize) -> HoughSpace {
        let mut data = DMatrix::zeros(n, n);
        for &((a, r), v) in cells {
            data[(a, r)] = v;
        }
        HoughSpace::from_matrix(data, 1.0).expect("square")
    }

    #[test]
    fn single_maximum_wins_with_k_one() {
        let space = space_with(&[((3, 1), 9.0), ((5, 2), 4.0)], 8);
        assert_eq!(find_max_angle_bin(&space, 1).expect("bin"), 3);
    }

    #[test]
    fn top_cells_are_averaged_and_floored() {
        let space = space_with(&[((2, 0), 9.0), ((5, 3), 8.0), ((6, 6), 7.0)], 8);
        // (2 + 5) / 2 = 3.5 → 3
        assert_eq!(find_max_angle_bin(&space, 2).expect("bin"), 3);
        // (2 + 5 + 6) / 3 = 4.33 → 4
        assert_eq!(find_max_angle_bin(&space, 3).expect("bin"), 4);
    }

    #[test]
    fn ties_resolve_by_row_major_order() {
        // Both cells tie; the stable sort keeps (1, 0) before (6, 0), so the
        // last entry taken with k = 1 is (6, 0).
        let space = space_with(&[((1, 0), 5.0), ((6, 0), 5.0)], 8);
        assert_eq!(find_max_angle_bin(&space, 1).expect("bin"), 6);
    }

    #[test]
    fn invalid_k_is_a_configuration_error() {
        let space = HoughSpace::new(3, 1.0);
        assert!(matches!(
            find_max_angle_bin(&space, 0),
            Err(CleanerError::Configuration(_))
        ));
        assert!(find_max_angle_bin(&space, 10).is_err());
        assert!(find_max_angle_bin(&space, 9).is_ok());
    }
}
