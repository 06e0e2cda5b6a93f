//! Error types for estimation lookups.

use thiserror::Error;

/// Errors that can occur when resolving estimator inputs.
///
/// The calculations themselves never fail; these cover lookups that a
/// presentation layer performs before calling them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EstimateError {
    /// Container index outside the catalog.
    #[error("Container index {index} out of range (catalog has {len} sizes)")]
    SkuIndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of containers in the catalog.
        len: usize,
    },

    /// No container matches the given label.
    #[error("Unknown container size: {query}. Valid options: {valid}")]
    UnknownSku {
        /// The label that was looked up.
        query: String,
        /// Comma-separated list of valid labels.
        valid: String,
    },

    /// Recommendation policy name not recognized.
    #[error(
        "Unknown recommendation policy: '{0}'. Valid options: leftover, units, area-threshold"
    )]
    UnknownPolicy(String),
}
