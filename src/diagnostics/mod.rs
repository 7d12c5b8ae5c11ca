//! Diagnostics returned alongside the classification of an event.
//!
//! [`CleanerReport`] is what [`HoughSpiralCleaner::process`](crate::HoughSpiralCleaner)
//! returns: the final [`ClassificationResult`](crate::ClassificationResult)
//! plus the intermediate peak-search values and per-stage timings.

pub mod report;
pub mod timing;

pub use report::{CleanerReport, LineSummary, PeakSearchStage};
pub use timing::{StageTiming, TimingBreakdown};
