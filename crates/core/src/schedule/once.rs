//! One-time schedules: an absolute date or an offset from a lifecycle event.

use chrono::NaiveDate;

use super::{ScheduleTime, StudyLifecycleEvent};
use crate::error::{Result, ValidationError};

/// A possibly partial calendar date. Absent parts are not defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DateComponents {
    year: Option<i32>,
    month: Option<u8>,
    day: Option<u8>,
}

impl DateComponents {
    pub fn new(year: Option<i32>, month: Option<u32>, day: Option<u32>) -> Result<Self> {
        let month = match month {
            Some(m) if (1..=12).contains(&m) => Some(m as u8),
            Some(m) => return Err(ValidationError::new("month", m, "1..=12")),
            None => None,
        };
        let day = match day {
            Some(d) if (1..=31).contains(&d) => Some(d as u8),
            Some(d) => return Err(ValidationError::new("day", d, "1..=31")),
            None => None,
        };
        Ok(Self { year, month, day })
    }

    /// A fully specified date.
    pub fn ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        Self::new(Some(year), Some(month), Some(day))
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }

    pub fn month(&self) -> Option<u8> {
        self.month
    }

    pub fn day(&self) -> Option<u8> {
        self.day
    }

    /// The concrete date, when all parts are present and form a real day.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year?, self.month?.into(), self.day?.into())
    }
}

impl From<NaiveDate> for DateComponents {
    fn from(date: NaiveDate) -> Self {
        use chrono::Datelike;
        Self {
            year: Some(date.year()),
            month: Some(date.month() as u8),
            day: Some(date.day() as u8),
        }
    }
}

/// A schedule that fires exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OneTimeSchedule {
    Date(DateComponents),
    Event {
        event: StudyLifecycleEvent,
        offset_in_days: i32,
        /// When absent, the engine uses the time of the anchor event itself.
        time: Option<ScheduleTime>,
    },
}

impl OneTimeSchedule {
    /// Fires at the moment `event` happens.
    pub fn on(event: StudyLifecycleEvent) -> Self {
        OneTimeSchedule::Event {
            event,
            offset_in_days: 0,
            time: None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            OneTimeSchedule::Date(_) => "date",
            OneTimeSchedule::Event { .. } => "event",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_dates_are_allowed() {
        let d = DateComponents::new(None, Some(3), None).unwrap();
        assert_eq!(d.month(), Some(3));
        assert_eq!(d.year(), None);
        assert_eq!(d.to_naive_date(), None);
    }

    #[test]
    fn rejects_out_of_range_month_and_day() {
        assert_eq!(DateComponents::new(None, Some(13), None).unwrap_err().field, "month");
        assert_eq!(DateComponents::new(None, None, Some(0)).unwrap_err().field, "day");
    }

    #[test]
    fn full_date_converts_to_naive_date() {
        let d = DateComponents::ymd(2025, 2, 14).unwrap();
        assert_eq!(d.to_naive_date(), NaiveDate::from_ymd_opt(2025, 2, 14));
        assert_eq!(DateComponents::from(NaiveDate::from_ymd_opt(2025, 2, 14).unwrap()), d);
        // Syntactically valid parts that do not name a real day.
        assert_eq!(DateComponents::ymd(2025, 2, 30).unwrap().to_naive_date(), None);
    }

    #[test]
    fn on_event_uses_defaults() {
        assert_eq!(
            OneTimeSchedule::on(StudyLifecycleEvent::Enrollment),
            OneTimeSchedule::Event {
                event: StudyLifecycleEvent::Enrollment,
                offset_in_days: 0,
                time: None,
            }
        );
    }
}
