use std::num::ParseIntError;

use thiserror::Error;

/// Errors produced when parsing a range written as `start..end[:step]`.
///
/// Generating a range never fails; only the textual form can be malformed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RangeParseError {
    /// The text has no `..` between start and end.
    #[error("range '{0}' is missing the '..' separator")]
    MissingSeparator(String),

    /// A bound is not a valid unsigned 32-bit integer.
    #[error("invalid {which} bound '{input}': {source}")]
    InvalidBound {
        /// Which bound failed (`"start"` or `"end"`).
        which: &'static str,
        /// Text that was rejected.
        input: String,
        /// Underlying integer parse failure.
        source: ParseIntError,
    },

    /// The step is not a valid signed 32-bit integer.
    #[error("invalid step '{input}': {source}")]
    InvalidStep {
        /// Text that was rejected.
        input: String,
        /// Underlying integer parse failure.
        source: ParseIntError,
    },
}
