use std::fmt::{Debug, Formatter};

use chrono::{DateTime, TimeDelta, Utc};

#[derive(Copy, Clone, Eq, PartialEq)]
#[must_use]
pub struct TimeRange {
    /// Inclusive.
    pub start: DateTime<Utc>,

    /// Exclusive.
    pub end: DateTime<Utc>,
}

impl Debug for TimeRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}..{:?}", self.start, self.end)
    }
}

impl TimeRange {
    pub const fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn duration(self) -> TimeDelta {
        self.end - self.start
    }

    #[must_use]
    pub fn contains(self, other: DateTime<Utc>) -> bool {
        (self.start <= other) && (other < self.end)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_contains_is_half_open() {
        let start = Utc.with_ymd_and_hms(2022, 2, 10, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2022, 2, 10, 0, 30, 0).unwrap();
        let range = TimeRange::new(start, end);

        assert!(range.contains(start));
        assert!(range.contains(end - TimeDelta::seconds(1)));
        assert!(!range.contains(end));
    }
}
