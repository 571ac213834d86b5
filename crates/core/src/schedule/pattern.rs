//! Recurring schedule patterns: daily, weekly, monthly.

use std::fmt;
use std::num::NonZeroU32;

use chrono::Weekday;

use super::ScheduleTime;
use crate::error::{Result, ValidationError};

/// Number of periods between occurrences. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Interval(NonZeroU32);

impl Interval {
    pub const ONE: Interval = Interval(NonZeroU32::MIN);

    pub fn new(value: u32) -> Result<Self> {
        NonZeroU32::new(value)
            .map(Interval)
            .ok_or_else(|| ValidationError::new("interval", value, ">= 1"))
    }

    pub fn get(&self) -> u32 {
        self.0.get()
    }

    pub fn is_default(&self) -> bool {
        *self == Self::ONE
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Calendar day within a month, 1 through 31.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayOfMonth(u8);

impl DayOfMonth {
    pub fn new(day: u32) -> Result<Self> {
        if !(1..=31).contains(&day) {
            return Err(ValidationError::new("day", day, "1..=31"));
        }
        Ok(DayOfMonth(day as u8))
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

/// How a repeated schedule recurs.
///
/// An absent `weekday` or `day` leaves the choice to the execution engine,
/// which anchors on the weekday / day-of-month of the first occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepetitionPattern {
    Daily {
        interval: Interval,
        time: ScheduleTime,
    },
    Weekly {
        interval: Interval,
        weekday: Option<Weekday>,
        time: ScheduleTime,
    },
    Monthly {
        interval: Interval,
        day: Option<DayOfMonth>,
        time: ScheduleTime,
    },
}

impl RepetitionPattern {
    /// Every day at `time`.
    pub fn daily(time: ScheduleTime) -> Self {
        RepetitionPattern::Daily {
            interval: Interval::ONE,
            time,
        }
    }

    /// Every week on `weekday` at `time`.
    pub fn weekly(weekday: Weekday, time: ScheduleTime) -> Self {
        RepetitionPattern::Weekly {
            interval: Interval::ONE,
            weekday: Some(weekday),
            time,
        }
    }

    /// Every month on `day` at `time`.
    pub fn monthly(day: DayOfMonth, time: ScheduleTime) -> Self {
        RepetitionPattern::Monthly {
            interval: Interval::ONE,
            day: Some(day),
            time,
        }
    }

    /// Same pattern with a different interval.
    pub fn every(self, n: Interval) -> Self {
        match self {
            RepetitionPattern::Daily { time, .. } => RepetitionPattern::Daily { interval: n, time },
            RepetitionPattern::Weekly { weekday, time, .. } => RepetitionPattern::Weekly {
                interval: n,
                weekday,
                time,
            },
            RepetitionPattern::Monthly { day, time, .. } => RepetitionPattern::Monthly {
                interval: n,
                day,
                time,
            },
        }
    }

    /// Wire discriminator for this pattern.
    pub fn tag(&self) -> &'static str {
        match self {
            RepetitionPattern::Daily { .. } => "daily",
            RepetitionPattern::Weekly { .. } => "weekly",
            RepetitionPattern::Monthly { .. } => "monthly",
        }
    }

    pub fn interval(&self) -> Interval {
        match self {
            RepetitionPattern::Daily { interval, .. }
            | RepetitionPattern::Weekly { interval, .. }
            | RepetitionPattern::Monthly { interval, .. } => *interval,
        }
    }

    pub fn time(&self) -> ScheduleTime {
        match self {
            RepetitionPattern::Daily { time, .. }
            | RepetitionPattern::Weekly { time, .. }
            | RepetitionPattern::Monthly { time, .. } => *time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_rejects_zero() {
        let err = Interval::new(0).unwrap_err();
        assert_eq!(err.field, "interval");
        assert_eq!(Interval::new(3).unwrap().get(), 3);
        assert!(Interval::default().is_default());
    }

    #[test]
    fn day_of_month_bounds() {
        assert!(DayOfMonth::new(1).is_ok());
        assert!(DayOfMonth::new(31).is_ok());
        assert_eq!(DayOfMonth::new(0).unwrap_err().field, "day");
        let err = DayOfMonth::new(32).unwrap_err();
        assert_eq!(err.field, "day");
        assert_eq!(err.value, "32");
    }

    #[test]
    fn every_keeps_variant_fields() {
        let time = ScheduleTime::new(14, 30, 0).unwrap();
        let p = RepetitionPattern::weekly(Weekday::Mon, time).every(Interval::new(2).unwrap());
        assert_eq!(
            p,
            RepetitionPattern::Weekly {
                interval: Interval::new(2).unwrap(),
                weekday: Some(Weekday::Mon),
                time,
            }
        );
        assert_eq!(p.tag(), "weekly");
        assert_eq!(p.time(), time);
    }
}
