//! The days/hours/minutes/seconds value type behind every calculation.
//!
//! Parsing keeps fields exactly as written (`90m` stays 90 minutes). Only the
//! total-seconds constructor, and therefore arithmetic, produces a normalized
//! value.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

use timecalc_utils::formatting::format_seconds;
use timecalc_utils::parse::{scan_decimal_component, scan_unit_component};

use crate::error::ParseDurationError;

const SECONDS_PER_MINUTE: f64 = 60.0;
const MINUTES_PER_HOUR: f64 = 60.0;
const HOURS_PER_DAY: f64 = 24.0;

/// A span of time. Field-wise equality: `90m` and `1h30m` are different
/// values with the same [`Duration::total_seconds`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Duration {
    /// Signed so that a negative total can be represented after subtraction.
    pub days: i64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: f64,
}

impl Duration {
    pub fn new(days: i64, hours: u64, minutes: u64, seconds: f64) -> Self {
        Self {
            days,
            hours,
            minutes,
            seconds,
        }
    }

    /// Build a normalized duration from a number of seconds.
    ///
    /// Uses floor division with non-negative remainders, so a negative total
    /// lands in `days` only: `-1` becomes `-1d23h59m59s`.
    pub fn from_seconds(total_seconds: f64) -> Self {
        let mut total_minutes = total_seconds.div_euclid(SECONDS_PER_MINUTE);
        let mut seconds = total_seconds.rem_euclid(SECONDS_PER_MINUTE);
        // A tiny negative remainder can round up to exactly one full minute.
        if seconds >= SECONDS_PER_MINUTE {
            seconds = 0.0;
            total_minutes += 1.0;
        }
        let total_hours = total_minutes.div_euclid(MINUTES_PER_HOUR);
        let minutes = total_minutes.rem_euclid(MINUTES_PER_HOUR);
        let days = total_hours.div_euclid(HOURS_PER_DAY);
        let hours = total_hours.rem_euclid(HOURS_PER_DAY);

        Self {
            days: days as i64,
            hours: hours as u64,
            minutes: minutes as u64,
            seconds,
        }
    }

    /// Parse a compact literal such as `1d2h3m4.5s`.
    ///
    /// Every component is optional but they must appear in d/h/m/s order, at
    /// most once each, with nothing else in the text. The empty string is the
    /// zero duration. Returns `None` on any mismatch.
    pub fn parse(text: &str) -> Option<Self> {
        let mut duration = Self::default();
        let mut cursor = 0;

        if let Some((digits, next)) = scan_unit_component(text, cursor, b'd') {
            duration.days = digits.parse().ok()?;
            cursor = next;
        }
        if let Some((digits, next)) = scan_unit_component(text, cursor, b'h') {
            duration.hours = digits.parse().ok()?;
            cursor = next;
        }
        if let Some((digits, next)) = scan_unit_component(text, cursor, b'm') {
            duration.minutes = digits.parse().ok()?;
            cursor = next;
        }
        if let Some((digits, next)) = scan_decimal_component(text, cursor, b's') {
            duration.seconds = digits
                .parse::<f64>()
                .ok()
                .filter(|seconds| seconds.is_finite())?;
            cursor = next;
        }

        (cursor == text.len()).then_some(duration)
    }

    pub fn total_seconds(&self) -> f64 {
        self.seconds
            + self.minutes as f64 * SECONDS_PER_MINUTE
            + self.hours as f64 * MINUTES_PER_HOUR * SECONDS_PER_MINUTE
            + self.days as f64 * HOURS_PER_DAY * MINUTES_PER_HOUR * SECONDS_PER_MINUTE
    }

    /// Whether hours, minutes and seconds are all within their natural range.
    pub fn is_normalized(&self) -> bool {
        (self.hours as f64) < HOURS_PER_DAY
            && (self.minutes as f64) < MINUTES_PER_HOUR
            && (0.0..SECONDS_PER_MINUTE).contains(&self.seconds)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.days != 0 {
            write!(f, "{}d", self.days)?;
        }
        if self.hours != 0 {
            write!(f, "{}h", self.hours)?;
        }
        if self.minutes != 0 {
            write!(f, "{}m", self.minutes)?;
        }
        write!(f, "{}s", format_seconds(self.seconds))
    }
}

impl FromStr for Duration {
    type Err = ParseDurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseDurationError {
            input: s.to_owned(),
        })
    }
}

impl Add for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Duration {
        Duration::from_seconds(self.total_seconds() + rhs.total_seconds())
    }
}

impl Sub for Duration {
    type Output = Duration;

    fn sub(self, rhs: Duration) -> Duration {
        Duration::from_seconds(self.total_seconds() - rhs.total_seconds())
    }
}

impl AddAssign for Duration {
    fn add_assign(&mut self, rhs: Duration) {
        *self = *self + rhs;
    }
}

impl SubAssign for Duration {
    fn sub_assign(&mut self, rhs: Duration) {
        *self = *self - rhs;
    }
}

impl Sum for Duration {
    fn sum<I: Iterator<Item = Duration>>(iter: I) -> Self {
        Duration::from_seconds(iter.map(|duration| duration.total_seconds()).sum())
    }
}
