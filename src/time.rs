use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minutes in a single day. The whole axis the resolver works on.
pub const MINUTES_IN_DAY: u16 = 1440;

/// The entire day, `[0, 1440)`.
pub const WHOLE_DAY: TimeRange = TimeRange(0, MINUTES_IN_DAY);

#[derive(Error, Debug, Eq, PartialEq)]
pub enum ValidationError {
    #[error("time range starts at {start} but ends earlier, at {end}")]
    Backwards { start: u16, end: u16 },
    #[error("time range ends at {end}, past the end of the day (1440)")]
    PastEndOfDay { end: u16 },
}

/// Half-open `[start, end)` range of minutes since midnight.
///
/// Ordering is lexicographic on `(start, end)`, so sorting a list of
/// ranges is deterministic regardless of input order.
#[derive(Deserialize, Serialize, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeRange(pub u16, pub u16);

impl TimeRange {
    /// Construct a new TimeRange over `[start, end)`.
    ///
    /// `start <= end` is a caller-side precondition; use [`TimeRange::try_new`]
    /// at trust boundaries.
    ///
    /// # Examples
    /// ```
    /// use zeitfenster::time::TimeRange;
    ///
    /// let test = TimeRange::new(0, 100);
    ///
    /// assert_eq!(test.0, 0);
    /// assert_eq!(test.1, 100);
    /// ```
    pub fn new(start: u16, end: u16) -> TimeRange {
        debug_assert!(start <= end);
        TimeRange(start, end)
    }

    /// Validating constructor for untrusted input.
    ///
    /// # Examples
    /// ```
    /// use zeitfenster::time::{TimeRange, ValidationError};
    ///
    /// assert!(TimeRange::try_new(30, 60).is_ok());
    /// assert_eq!(
    ///     TimeRange::try_new(60, 30),
    ///     Err(ValidationError::Backwards { start: 60, end: 30 })
    /// );
    /// assert_eq!(
    ///     TimeRange::try_new(0, 2000),
    ///     Err(ValidationError::PastEndOfDay { end: 2000 })
    /// );
    /// ```
    pub fn try_new(start: u16, end: u16) -> Result<TimeRange, ValidationError> {
        if start > end {
            Err(ValidationError::Backwards { start, end })
        } else if end > MINUTES_IN_DAY {
            Err(ValidationError::PastEndOfDay { end })
        } else {
            Ok(TimeRange(start, end))
        }
    }

    /// Convenience function for readability
    /// Returns the start of the TimeRange
    pub fn start(self) -> u16 {
        self.0
    }

    /// Convenience function for readability
    /// Returns the (exclusive) end of the TimeRange
    pub fn end(self) -> u16 {
        self.1
    }

    /// Length of the range in minutes.
    ///
    /// # Examples
    /// ```
    /// use zeitfenster::time::TimeRange;
    ///
    /// assert_eq!(TimeRange::new(30, 90).len(), 60);
    /// assert_eq!(TimeRange::new(30, 30).len(), 0);
    /// ```
    pub fn len(self) -> u16 {
        self.1 - self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == self.1
    }

    /// Whether `other` lies entirely within `self`.
    ///
    /// # Examples
    /// ```
    /// use zeitfenster::time::TimeRange;
    ///
    /// assert!(TimeRange::new(0, 100).contains(TimeRange::new(20, 80)));
    /// assert!(TimeRange::new(0, 100).contains(TimeRange::new(0, 100)));
    /// assert!(!TimeRange::new(0, 100).contains(TimeRange::new(80, 120)));
    /// ```
    pub fn contains(self, other: TimeRange) -> bool {
        self.0 <= other.0 && other.1 <= self.1
    }

    /// Whether `self` and `other` share any minute. Ranges that merely
    /// touch (`[0, 60)` and `[60, 90)`) do not overlap.
    ///
    /// # Examples
    /// ```
    /// use zeitfenster::time::TimeRange;
    ///
    /// assert!(TimeRange::new(0, 60).overlaps(TimeRange::new(30, 90)));
    /// assert!(!TimeRange::new(0, 60).overlaps(TimeRange::new(60, 90)));
    /// ```
    pub fn overlaps(self, other: TimeRange) -> bool {
        self.0 < other.1 && other.0 < self.1
    }
}

pub trait TimeMerge {
    fn time_merge(self) -> Vec<TimeRange>;
}

impl<'a, T> TimeMerge for T
where
    T: Iterator<Item = &'a TimeRange>,
{
    /// Combines overlapping and touching TimeRanges together.
    ///
    /// Input must be sorted by start. A single sweep carries an
    /// accumulator forward: each range either extends it or closes it
    /// out, so a run of three or more mutually overlapping ranges
    /// collapses into one. The output is sorted, pairwise disjoint,
    /// never touching, and covers exactly the same minutes as the
    /// input. Re-merging the output returns it unchanged.
    ///
    /// # Examples
    /// ```
    /// use zeitfenster::time::{TimeMerge, TimeRange};
    ///
    /// let times = vec![
    ///     TimeRange::new(0, 30),
    ///     TimeRange::new(20, 60),
    ///     TimeRange::new(60, 90),
    ///     TimeRange::new(120, 180),
    /// ];
    ///
    /// assert_eq!(
    ///     times.iter().time_merge(),
    ///     vec![TimeRange::new(0, 90), TimeRange::new(120, 180)]
    /// );
    /// ```
    fn time_merge(self) -> Vec<TimeRange> {
        let size_hint = self.size_hint().1.unwrap_or(0);
        let (last, mut acc) = self.fold(
            (None, Vec::with_capacity(size_hint)),
            |(last, mut acc), &curr| match last {
                None => (Some(curr), acc),
                Some(time) => {
                    if curr.start() <= time.end() {
                        (
                            Some(TimeRange::new(time.start(), time.end().max(curr.end()))),
                            acc,
                        )
                    } else {
                        acc.push(time);
                        (Some(curr), acc)
                    }
                }
            },
        );

        if let Some(time) = last {
            acc.push(time);
        }

        acc
    }
}

pub trait Available {
    fn available_times(self, duration: u16) -> Vec<TimeRange>;
}

impl<'a, T> Available for T
where
    T: Iterator<Item = &'a TimeRange>,
{
    /// Self is the busy portion of the day: disjoint TimeRanges sorted
    /// by start. Returns the complementary free TimeRanges within
    /// `[0, 1440)` that are at least `duration` minutes long. Shorter
    /// and zero-length gaps are dropped, not errors. An empty busy list
    /// leaves the whole day free.
    ///
    /// # Examples
    /// ```
    /// use zeitfenster::time::{Available, TimeRange};
    ///
    /// let busy = vec![TimeRange::new(60, 120), TimeRange::new(300, 360)];
    ///
    /// assert_eq!(
    ///     busy.iter().available_times(30),
    ///     vec![
    ///         TimeRange::new(0, 60),
    ///         TimeRange::new(120, 300),
    ///         TimeRange::new(360, 1440),
    ///     ]
    /// );
    ///
    /// // The 60-minute gap before the first meeting is too short now
    /// assert_eq!(
    ///     busy.iter().available_times(90),
    ///     vec![TimeRange::new(120, 300), TimeRange::new(360, 1440)]
    /// );
    /// ```
    fn available_times(self, duration: u16) -> Vec<TimeRange> {
        let mut free = Vec::with_capacity(self.size_hint().1.unwrap_or(0) + 1);
        let mut cursor = 0;

        for busy in self {
            let gap = TimeRange::new(cursor, busy.start());
            if !gap.is_empty() && gap.len() >= duration {
                free.push(gap);
            }
            cursor = busy.end();
        }

        let tail = TimeRange::new(cursor, MINUTES_IN_DAY);
        if !tail.is_empty() && tail.len() >= duration {
            free.push(tail);
        }

        free
    }
}
