//! Time-of-day values used by repetition patterns and notifications.

use std::fmt;

use chrono::NaiveTime;

use crate::error::{Result, ValidationError};

/// A sub-day time-of-day. Minute and second default to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ScheduleTime {
    hour: u8,
    minute: u8,
    second: u8,
}

impl ScheduleTime {
    pub const MIDNIGHT: ScheduleTime = ScheduleTime {
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// Build a time, rejecting any component outside its range.
    pub fn new(hour: u32, minute: u32, second: u32) -> Result<Self> {
        Ok(Self {
            hour: checked("hour", hour, 23)?,
            minute: checked("minute", minute, 59)?,
            second: checked("second", second, 59)?,
        })
    }

    /// Whole-hour time with minute and second at their defaults.
    pub fn at_hour(hour: u32) -> Result<Self> {
        Self::new(hour, 0, 0)
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> u8 {
        self.second
    }
}

fn checked(field: &str, value: u32, max: u32) -> Result<u8> {
    if value > max {
        return Err(ValidationError::new(field, value, format!("0..={max}")));
    }
    Ok(value as u8)
}

impl From<ScheduleTime> for NaiveTime {
    fn from(t: ScheduleTime) -> Self {
        // Components are range-checked on construction.
        NaiveTime::from_hms_opt(t.hour.into(), t.minute.into(), t.second.into())
            .unwrap_or(NaiveTime::MIN)
    }
}

impl fmt::Display for ScheduleTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}
