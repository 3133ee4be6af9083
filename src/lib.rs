//! # Overflow-safe Ranges and Traversal Helpers
//!
//! Two small, independent sequence utilities.
//!
//! ## Ranges
//!
//! [`RangeBuilder`] configures a range of `u32` values with a signed `i32`
//! step and hands out lazy [`RangeIter`]s:
//!
//! 1. **Ascending** (`step > 0`): `start, start + step, ...` while `<= end`
//! 2. **Descending** (`step < 0`): `start, start - |step|, ...` while `>= end`
//! 3. **Degenerate** (`step == 0`): `[start]` if `start == end`, else empty
//!
//! A step that would leave the `u32` domain ends the sequence instead of
//! wrapping. Every iterator works from a [`RangeSnapshot`], so changing the
//! builder later never changes an iterator already handed out.
//!
//! ## Traversal
//!
//! [`Each`] adds `each`, `each_with_index` and the accumulator-threading
//! `each_with` to anything iterable; [`TryEach`] is the fallible form.
//!
//! ## Usage Example
//!
//! ```
//! use strix::{Each, RangeBuilder};
//!
//! let mut builder = RangeBuilder::default();
//! builder.from(10).to(0).step(-3);
//!
//! let mut values = Vec::new();
//! let values = builder.iter().each_with(&mut values, |v, acc| acc.push(v));
//! assert_eq!(*values, [10, 7, 4, 1]);
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod each; // Per-element traversal helpers
pub mod range; // Unsigned range generation

// Re-exports for convenience
pub use each::{Each, TryEach};
pub use range::{RangeBuilder, RangeIter, RangeParseError, RangeSnapshot};
