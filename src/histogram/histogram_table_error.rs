use crate::math::Real;

/// Errors that can occur when creating a histogram table.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq)]
pub enum HistogramTableError {
    /// Fewer than two thresholds were requested, so the bin width is undefined.
    #[error("a histogram table needs at least 2 thresholds, got {0}")]
    TooFewThresholds(usize),
    /// The threshold range is not finite or not increasing.
    #[error("invalid threshold range [{t0}, {t1}]: the bounds must be finite with t0 < t1")]
    InvalidRange {
        /// The first threshold.
        t0: Real,
        /// The last threshold.
        t1: Real,
    },
}
