use thiserror::Error;

/// Errors reported by the cleaner stages.
///
/// Every variant is a precondition violation detected before any partial
/// result is produced, so a failed event can simply be skipped.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CleanerError {
    /// A parameter is out of range relative to the accumulator size.
    #[error("invalid configuration: {0}")]
    Configuration(String),
    /// A requested angular slice does not fit in the accumulator.
    #[error("angular slice [{start}, {start} + {count}) exceeds accumulator with {num_bins} bins")]
    OutOfRange {
        start: isize,
        count: usize,
        num_bins: usize,
    },
    /// The refinement window around a radius peak carries no votes.
    #[error("no votes in refinement window around radius bin {peak_bin}")]
    NoPeak { peak_bin: usize },
    /// Per-point input sequences disagree in length.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, CleanerError>;
