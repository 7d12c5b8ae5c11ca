//! Two-stage Hough peak search and point classification.
//!
//! Overview
//! - [`angle`] picks the dominant angle bin as the floored mean of the K
//!   highest-voted accumulator cells.
//! - [`slice`] sums the angle rows `[c - S, c + S)` into a radius profile.
//! - [`radius`] finds the strongest radius peaks and refines each one to the
//!   vote-weighted centroid of a clamped window.
//! - [`classify`] assigns every point to the candidate line with the smallest
//!   residual and drops lines with too few points.
//! - [`HoughSpiralCleaner`] chains the stages for one event.
//!
//! Key Ideas
//! - The dominant angle is shared by all candidate lines of an event; only
//!   the radius differs between them.
//! - Candidate order matters on ties: a point moves only on a strict
//!   improvement, so the earlier candidate keeps it.

pub mod angle;
pub mod classify;
pub mod params;
mod pipeline;
pub mod radius;
pub mod slice;

pub use params::CleanerParams;
pub use pipeline::HoughSpiralCleaner;
