//! Schedule definitions: once or repeated.

use uuid::Uuid;

use super::{OneTimeSchedule, RepetitionPattern};

/// Signed calendar duration applied before the first repeated occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CalendarOffset {
    pub years: i32,
    pub months: i32,
    pub days: i32,
    pub hours: i32,
    pub minutes: i32,
    pub seconds: i32,
}

impl CalendarOffset {
    pub const ZERO: CalendarOffset = CalendarOffset {
        years: 0,
        months: 0,
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    pub fn days(days: i32) -> Self {
        Self {
            days,
            ..Self::ZERO
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// When a component occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScheduleDefinition {
    Once(OneTimeSchedule),
    Repeated {
        pattern: RepetitionPattern,
        offset: CalendarOffset,
    },
}

impl ScheduleDefinition {
    /// Repeat `pattern` starting immediately.
    pub fn repeated(pattern: RepetitionPattern) -> Self {
        ScheduleDefinition::Repeated {
            pattern,
            offset: CalendarOffset::ZERO,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            ScheduleDefinition::Once(_) => "once",
            ScheduleDefinition::Repeated { .. } => "repeated",
        }
    }

    /// Component this definition is anchored to via `completedTask`, if any.
    pub fn referenced_component(&self) -> Option<Uuid> {
        match self {
            ScheduleDefinition::Once(OneTimeSchedule::Event { event, .. }) => {
                event.referenced_component()
            }
            _ => None,
        }
    }
}
