//! Immutable range configuration

use std::fmt;
use std::str::FromStr;

use super::{RangeIter, RangeParseError};

/// Captured `(start, end, step)` of a range.
///
/// This is the restartable source of a sequence: every call to
/// [`iter`](Self::iter) starts again from `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeSnapshot {
    start: u32,
    end: u32,
    step: i32,
}

impl RangeSnapshot {
    /// Create a snapshot from explicit values.
    pub const fn new(start: u32, end: u32, step: i32) -> Self {
        Self { start, end, step }
    }

    /// First value of the sequence, if it is not empty.
    pub const fn start(&self) -> u32 {
        self.start
    }

    /// Inclusive bound (upper for positive steps, lower for negative ones).
    pub const fn end(&self) -> u32 {
        self.end
    }

    /// Signed distance between successive values.
    pub const fn step(&self) -> i32 {
        self.step
    }

    /// Fresh iterator positioned at the beginning of the sequence.
    pub fn iter(&self) -> RangeIter {
        RangeIter::new(*self)
    }

    /// Exact number of values the sequence produces.
    pub fn len(&self) -> u64 {
        if self.admits(self.start) {
            self.values_from(self.start)
        } else {
            0
        }
    }

    /// Whether the sequence produces no values at all.
    pub fn is_empty(&self) -> bool {
        !self.admits(self.start)
    }

    /// Whether `value` lies on the permitted side of `end` for this direction.
    pub(crate) fn admits(&self, value: u32) -> bool {
        match self.step {
            step if step > 0 => value <= self.end,
            step if step < 0 => value >= self.end,
            _ => value == self.end,
        }
    }

    /// Values produced from an admitted `value` onward, inclusive.
    pub(crate) fn values_from(&self, value: u32) -> u64 {
        if self.step == 0 {
            return 1;
        }
        let distance = u64::from(value.abs_diff(self.end));
        distance / u64::from(self.step.unsigned_abs()) + 1
    }
}

impl IntoIterator for RangeSnapshot {
    type Item = u32;
    type IntoIter = RangeIter;

    fn into_iter(self) -> RangeIter {
        RangeIter::new(self)
    }
}

impl IntoIterator for &RangeSnapshot {
    type Item = u32;
    type IntoIter = RangeIter;

    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl fmt::Display for RangeSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}:{}", self.start, self.end, self.step)
    }
}

/// Parses `start..end[:step]`.
///
/// The step defaults to `1`; an empty end (`5..`) means `end = start`.
impl FromStr for RangeSnapshot {
    type Err = RangeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start_text, rest) = s
            .split_once("..")
            .ok_or_else(|| RangeParseError::MissingSeparator(s.to_string()))?;
        let (end_text, step_text) = match rest.split_once(':') {
            Some((end, step)) => (end, Some(step)),
            None => (rest, None),
        };

        let start = parse_bound("start", start_text)?;
        let end = if end_text.trim().is_empty() {
            start
        } else {
            parse_bound("end", end_text)?
        };
        let step = match step_text {
            Some(text) => text
                .trim()
                .parse()
                .map_err(|source| RangeParseError::InvalidStep {
                    input: text.to_string(),
                    source,
                })?,
            None => 1,
        };

        Ok(Self::new(start, end, step))
    }
}

fn parse_bound(which: &'static str, text: &str) -> Result<u32, RangeParseError> {
    text.trim()
        .parse()
        .map_err(|source| RangeParseError::InvalidBound {
            which,
            input: text.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_matches_iteration() {
        for snapshot in [
            RangeSnapshot::new(0, 10, 3),
            RangeSnapshot::new(10, 0, -3),
            RangeSnapshot::new(4, 4, 0),
            RangeSnapshot::new(4, 5, 0),
            RangeSnapshot::new(9, 1, 2),
            RangeSnapshot::new(u32::MAX - 10, u32::MAX, 4),
        ] {
            assert_eq!(snapshot.len(), snapshot.iter().count() as u64, "{snapshot}");
        }
    }

    #[test]
    fn test_full_domain_len() {
        assert_eq!(RangeSnapshot::new(0, u32::MAX, 1).len(), 1 << 32);
        assert_eq!(RangeSnapshot::new(u32::MAX, 0, -1).len(), 1 << 32);
    }

    #[test]
    fn test_is_empty() {
        assert!(RangeSnapshot::new(3, 1, 1).is_empty());
        assert!(!RangeSnapshot::new(3, 3, -7).is_empty());
    }

    #[test]
    fn test_display_and_parse_agree() {
        let snapshot = RangeSnapshot::new(10, 0, -3);
        assert_eq!(snapshot.to_string(), "10..0:-3");
        assert_eq!("10..0:-3".parse::<RangeSnapshot>().unwrap(), snapshot);
    }

    #[test]
    fn test_parse_defaults() {
        assert_eq!(
            "2..8".parse::<RangeSnapshot>().unwrap(),
            RangeSnapshot::new(2, 8, 1)
        );
        assert_eq!(
            "5..".parse::<RangeSnapshot>().unwrap(),
            RangeSnapshot::new(5, 5, 1)
        );
        assert_eq!(
            " 1 .. 3 : 2 ".parse::<RangeSnapshot>().unwrap(),
            RangeSnapshot::new(1, 3, 2)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_derives() {
        fn assert_serde<T: serde::Serialize + serde::de::DeserializeOwned>() {}
        assert_serde::<RangeSnapshot>();
        assert_serde::<crate::RangeBuilder>();
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "1-3".parse::<RangeSnapshot>(),
            Err(RangeParseError::MissingSeparator(_))
        ));
        assert!(matches!(
            "-1..3".parse::<RangeSnapshot>(),
            Err(RangeParseError::InvalidBound { which: "start", .. })
        ));
        assert!(matches!(
            "1..x".parse::<RangeSnapshot>(),
            Err(RangeParseError::InvalidBound { which: "end", .. })
        ));
        assert!(matches!(
            "1..3:".parse::<RangeSnapshot>(),
            Err(RangeParseError::InvalidStep { .. })
        ));
    }
}
