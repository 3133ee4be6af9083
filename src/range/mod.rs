//! Overflow-safe unsigned ranges
//!
//! A range is `start`, `end` (inclusive bound) and a signed `step`:
//! - positive step counts up while values stay `<= end`
//! - negative step counts down while values stay `>= end`
//! - zero step yields `start` once if `start == end`, and nothing otherwise
//!
//! Steps that would leave the `u32` domain end the sequence; values never
//! wrap. No configuration is invalid, some are just empty.

mod builder;
mod error;
mod iter;
mod snapshot;

pub use builder::RangeBuilder;
pub use error::RangeParseError;
pub use iter::RangeIter;
pub use snapshot::RangeSnapshot;
