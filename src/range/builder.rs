//! Fluent range configuration

use super::{RangeIter, RangeSnapshot};

/// Mutable configuration for an unsigned range (fluent API).
///
/// Setters accept any value; combinations that cannot produce values (an
/// ascending step with `start > end`, say) simply yield an empty sequence.
/// Iterators capture a [`RangeSnapshot`], so the builder can be
/// reconfigured and reused without disturbing iterators taken earlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeBuilder {
    start: u32,
    end: u32,
    step: i32,
}

impl RangeBuilder {
    /// Create builder, defaulting to `start = 0`, `end = start`, `step = 1`.
    ///
    /// The `end` default is resolved here, once; changing `start` later
    /// does not move `end` along with it.
    pub fn new(start: Option<u32>, end: Option<u32>, step: Option<i32>) -> Self {
        let start = start.unwrap_or(0);
        Self {
            start,
            end: end.unwrap_or(start),
            step: step.unwrap_or(1),
        }
    }

    /// Set first value of the range
    pub fn from(&mut self, start: u32) -> &mut Self {
        self.start = start;
        self
    }

    /// Set inclusive bound of the range
    ///
    /// The bound is only produced when it is reachable in whole steps from
    /// `start`; otherwise the range stops at the last value not beyond it.
    pub fn to(&mut self, end: u32) -> &mut Self {
        self.end = end;
        self
    }

    /// Set signed step (negative counts down)
    pub fn step(&mut self, step: i32) -> &mut Self {
        self.step = step;
        self
    }

    /// Configured start
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Configured end
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Configured step
    pub fn step_size(&self) -> i32 {
        self.step
    }

    /// Capture the current configuration as an immutable value.
    pub fn snapshot(&self) -> RangeSnapshot {
        RangeSnapshot::new(self.start, self.end, self.step)
    }

    /// Iterate over the values of the current configuration.
    pub fn iter(&self) -> RangeIter {
        self.snapshot().iter()
    }
}

impl Default for RangeBuilder {
    fn default() -> Self {
        Self::new(None, None, None)
    }
}

impl IntoIterator for RangeBuilder {
    type Item = u32;
    type IntoIter = RangeIter;

    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl IntoIterator for &RangeBuilder {
    type Item = u32;
    type IntoIter = RangeIter;

    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let builder = RangeBuilder::default();
        assert_eq!(builder.start(), 0);
        assert_eq!(builder.end(), 0);
        assert_eq!(builder.step_size(), 1);
        assert_eq!(builder.iter().collect::<Vec<_>>(), [0]);
    }

    #[test]
    fn test_end_defaults_to_initial_start() {
        let mut builder = RangeBuilder::new(Some(7), None, None);
        assert_eq!(builder.end(), 7);

        builder.from(3);
        assert_eq!(builder.end(), 7);
        assert_eq!(builder.iter().collect::<Vec<_>>(), [3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_fluent_setters_return_same_builder() {
        let mut builder = RangeBuilder::default();
        let address: *const RangeBuilder = &builder;
        let chained: *const RangeBuilder = builder.from(1).to(9).step(4);
        assert!(std::ptr::eq(address, chained));
        assert_eq!(builder.snapshot(), RangeSnapshot::new(1, 9, 4));
    }

    #[test]
    fn test_iterator_unaffected_by_later_mutation() {
        let mut builder = RangeBuilder::new(Some(0), Some(4), None);
        let iter = builder.iter();
        builder.from(10).to(0).step(-5);

        assert_eq!(iter.collect::<Vec<_>>(), [0, 1, 2, 3, 4]);
        assert_eq!(builder.iter().collect::<Vec<_>>(), [10, 5, 0]);
    }

    #[test]
    fn test_for_loop_over_builder() {
        let builder = RangeBuilder::new(Some(6), Some(0), Some(-3));
        let mut seen = Vec::new();
        for value in &builder {
            seen.push(value);
        }
        assert_eq!(seen, [6, 3, 0]);
    }
}
