#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod batch;
pub mod cleaner;
pub mod diagnostics;
pub mod error;
pub mod types;

// Building blocks – public, but lower level than the cleaner itself.
pub mod arclength;
pub mod config;
pub mod hough;
pub mod io;
pub mod metrics;
pub mod peaks;

// --- High-level re-exports -------------------------------------------------

pub use crate::cleaner::{CleanerParams, HoughSpiralCleaner};
pub use crate::error::{CleanerError, Result};
pub use crate::types::{CandidateLine, ClassificationResult};

pub use crate::diagnostics::CleanerReport;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use hough_spiral_cleaner::prelude::*;
/// use nalgebra::{Point2, Point3};
///
/// # fn main() -> Result<(), CleanerError> {
/// let xyz: Vec<Point3<f64>> = (0..200)
///     .map(|i| Point3::new(100.0, 20.0 + i as f64 * 0.1, i as f64))
///     .collect();
/// let cleaner = HoughSpiralCleaner::new(CleanerParams::default())?;
/// let report = cleaner.process(&xyz, Point2::new(0.0, 0.0))?;
/// println!("lines kept: {}", report.num_kept_lines());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::batch::{process_events, Event};
    pub use crate::{CleanerError, CleanerParams, ClassificationResult, HoughSpiralCleaner};
}
