//! Processing of many independent events.
//!
//! Events share no state, so with the `parallel` feature they are mapped on
//! the rayon pool. Each event yields its own `Result`; a failed event does not
//! affect the others.

use crate::cleaner::HoughSpiralCleaner;
use crate::diagnostics::CleanerReport;
use crate::error::Result;
use log::debug;
use nalgebra::{Point2, Point3};

/// Points of one event with the rotation center used for its arc lengths.
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    pub center: Point2<f64>,
    pub points: Vec<Point3<f64>>,
}

/// Runs the cleaner on every event, preserving input order.
pub fn process_events(cleaner: &HoughSpiralCleaner, events: &[Event]) -> Vec<Result<CleanerReport>> {
    #[cfg(feature = "parallel")]
    let results = process_parallel(cleaner, events);
    #[cfg(not(feature = "parallel"))]
    let results: Vec<Result<CleanerReport>> = events
        .iter()
        .map(|ev| cleaner.process(&ev.points, ev.center))
        .collect();

    let failed = results.iter().filter(|r| r.is_err()).count();
    debug!(
        "process_events: {} events, {} failed",
        results.len(),
        failed
    );
    results
}

#[cfg(feature = "parallel")]
fn process_parallel(cleaner: &HoughSpiralCleaner, events: &[Event]) -> Vec<Result<CleanerReport>> {
    use rayon::prelude::*;

    events
        .par_iter()
        .map(|ev| cleaner.process(&ev.points, ev.center))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cleaner::CleanerParams;
    use crate::hough::LinearHough;

    #[test]
    fn failures_stay_per_event() {
        let cleaner = HoughSpiralCleaner::new(CleanerParams {
            num_angle_bins_to_reduce: 1,
            hough_space_slice_size: 2,
            peak_width: 1,
            min_points_per_line: 1,
            linear_hough: LinearHough::new(20, 20.0),
            ..Default::default()
        })
        .expect("params");

        let good = Event {
            center: Point2::new(0.0, 0.0),
            points: (0..10).map(|i| Point3::new(4.0, 4.0, i as f64 - 5.0)).collect(),
        };
        // An empty event has an all-zero accumulator; the top cell is the
        // last one, whose angle window runs past the end.
        let empty = Event {
            center: Point2::new(0.0, 0.0),
            points: Vec::new(),
        };

        let results = process_events(&cleaner, &[good.clone(), empty, good]);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert!(results[2].is_ok());
    }
}
