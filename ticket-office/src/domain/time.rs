//! Time-of-day handling for line timetables.
//!
//! Timetables give stop times as "H:MM" strings with no date attached. A
//! [`ClockTime`] is a minute-granularity time of day; comparisons and
//! durations are computed on its ordinal (minutes since midnight).

use chrono::{NaiveTime, Timelike};
use std::cmp::Ordering;
use std::fmt;

/// Number of minutes in a day; ordinals live in `0..MINUTES_PER_DAY`.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Error returned when building or parsing an invalid time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A time of day with minute granularity.
///
/// Equality and ordering are defined by [`ClockTime::ordinal`].
///
/// # Examples
///
/// ```
/// use ticket_office::domain::ClockTime;
///
/// let t = ClockTime::parse("7:05").unwrap();
/// assert_eq!(t.ordinal(), 7 * 60 + 5);
/// assert_eq!(t.to_string(), "7:05");
/// assert_eq!(ClockTime::from_ordinal(t.ordinal()).unwrap(), t);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockTime {
    time: NaiveTime,
}

impl ClockTime {
    /// Create a time from hour (0-23) and minute (0-59) components.
    pub fn from_numbers(hour: u32, minute: u32) -> Result<Self, TimeError> {
        if hour >= 24 {
            return Err(TimeError::new("hour must be 0-23"));
        }
        if minute >= 60 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| TimeError::new("invalid time"))?;

        Ok(Self { time })
    }

    /// Create a time from minutes since midnight.
    pub fn from_ordinal(ordinal: u32) -> Result<Self, TimeError> {
        if ordinal >= MINUTES_PER_DAY {
            return Err(TimeError::new("ordinal must be below 1440"));
        }
        Self::from_numbers(ordinal / 60, ordinal % 60)
    }

    /// Parse a time from the protocol's "H:MM" form.
    ///
    /// The hour has no leading zero and is at least 1 digit; the minute is
    /// exactly two digits.
    ///
    /// # Examples
    ///
    /// ```
    /// use ticket_office::domain::ClockTime;
    ///
    /// assert!(ClockTime::parse("7:00").is_ok());
    /// assert!(ClockTime::parse("23:59").is_ok());
    ///
    /// // Out of range
    /// assert!(ClockTime::parse("24:00").is_err());
    /// assert!(ClockTime::parse("7:60").is_err());
    ///
    /// // Wrong shape
    /// assert!(ClockTime::parse("07:00").is_err());
    /// assert!(ClockTime::parse("7:0").is_err());
    /// assert!(ClockTime::parse("700").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        if !is_clock_shape(s) {
            return Err(TimeError::new("expected H:MM format"));
        }

        let (hour, minute) = s
            .split_once(':')
            .ok_or_else(|| TimeError::new("expected colon"))?;

        // Shape check guarantees digits; only overflow can fail here.
        let hour: u32 = hour
            .parse()
            .map_err(|_| TimeError::new("hour must be 0-23"))?;
        let minute: u32 = minute
            .parse()
            .map_err(|_| TimeError::new("invalid minute digits"))?;

        Self::from_numbers(hour, minute)
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    /// Minutes since midnight.
    pub fn ordinal(&self) -> u32 {
        self.time.num_seconds_from_midnight() / 60
    }

    /// Signed number of minutes from `self` to `later`.
    ///
    /// Negative if `later` is actually earlier in the day.
    pub fn minutes_until(&self, later: ClockTime) -> i64 {
        i64::from(later.ordinal()) - i64::from(self.ordinal())
    }
}

/// Whether `s` has the lexical shape of a timetable time: `[1-9][0-9]*:[0-9][0-9]`.
///
/// This only checks the shape; the value may still be out of range.
pub fn is_clock_shape(s: &str) -> bool {
    let Some((hour, minute)) = s.split_once(':') else {
        return false;
    };

    let hour = hour.as_bytes();
    let minute = minute.as_bytes();

    !hour.is_empty()
        && hour[0] != b'0'
        && hour.iter().all(u8::is_ascii_digit)
        && minute.len() == 2
        && minute.iter().all(u8::is_ascii_digit)
}

impl Ord for ClockTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordinal().cmp(&other.ordinal())
    }
}

impl PartialOrd for ClockTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClockTime({}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour(), self.minute())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Building from components then going through the ordinal roundtrips
        #[test]
        fn ordinal_roundtrip(hour in 0u32..24, minute in 0u32..60) {
            let time = ClockTime::from_numbers(hour, minute).unwrap();
            prop_assert_eq!(ClockTime::from_ordinal(time.ordinal()).unwrap(), time);
        }

        /// Ordering agrees with ordinal ordering
        #[test]
        fn ordering_matches_ordinal(a in 0u32..MINUTES_PER_DAY, b in 0u32..MINUTES_PER_DAY) {
            let ta = ClockTime::from_ordinal(a).unwrap();
            let tb = ClockTime::from_ordinal(b).unwrap();
            prop_assert_eq!(ta.cmp(&tb), a.cmp(&b));
            prop_assert_eq!(ta == tb, a == b);
            prop_assert_eq!(ta <= tb, a <= b);
        }

        /// Display then parse roundtrips for hours the protocol can express
        #[test]
        fn display_parse_roundtrip(hour in 1u32..24, minute in 0u32..60) {
            let time = ClockTime::from_numbers(hour, minute).unwrap();
            prop_assert_eq!(ClockTime::parse(&time.to_string()).unwrap(), time);
        }

        /// Out-of-range components are rejected
        #[test]
        fn invalid_components_rejected(hour in 24u32..100, minute in 60u32..100) {
            prop_assert!(ClockTime::from_numbers(hour, 0).is_err());
            prop_assert!(ClockTime::from_numbers(0, minute).is_err());
        }
    }
}
