//! Trend analysis error types

use thiserror::Error;

/// Errors that can occur while fitting a trend
///
/// Unparsable input never reaches this enum; the parser drops it silently.
/// These two cases are kept distinct so a caller can tell "not enough
/// points" apart from "points are numerically unusable".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrendError {
    /// Fewer than two positive-value measurements remained after filtering
    #[error("at least {required} positive measurements are required, found {n}")]
    InsufficientData { n: usize, required: usize },

    /// The weighted normal equations are singular
    #[error("degenerate fit: weighted normal equations are singular (all measurements fall on the same day?)")]
    DegenerateFit,
}
