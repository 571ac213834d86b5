//! Push-notification settings attached to a schedule.

use std::fmt;

use super::ScheduleTime;
use crate::error::{Result, ValidationError};

/// Name of a caller-defined notification thread. Never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ThreadName(String);

impl ThreadName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::new("name", format!("{:?}", name), "a non-empty thread name"));
        }
        Ok(ThreadName(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ThreadName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which notification thread an occurrence is posted to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NotificationThread {
    Global,
    Task,
    None,
    Custom(ThreadName),
}

impl NotificationThread {
    /// A caller-named thread. The name must not be blank.
    pub fn custom(name: impl Into<String>) -> Result<Self> {
        ThreadName::new(name).map(NotificationThread::Custom)
    }

    pub fn tag(&self) -> &'static str {
        match self {
            NotificationThread::Global => "global",
            NotificationThread::Task => "task",
            NotificationThread::None => "none",
            NotificationThread::Custom(_) => "custom",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum NotificationsConfig {
    #[default]
    Disabled,
    Enabled {
        thread: NotificationThread,
        /// When absent, notify at the occurrence time.
        time: Option<ScheduleTime>,
    },
}

impl NotificationsConfig {
    /// Task-thread notification at the occurrence time.
    pub fn task() -> Self {
        NotificationsConfig::Enabled {
            thread: NotificationThread::Task,
            time: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, NotificationsConfig::Enabled { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_rejects_blank_names() {
        assert!(NotificationThread::custom("reminders").is_ok());
        assert_eq!(NotificationThread::custom("  ").unwrap_err().field, "name");
    }

    #[test]
    fn thread_name_cannot_be_blank() {
        assert_eq!(ThreadName::new("").unwrap_err().field, "name");
        assert_eq!(ThreadName::new("\t ").unwrap_err().expected, "a non-empty thread name");

        let name = ThreadName::new("evening").unwrap();
        assert_eq!(name.as_str(), "evening");
        assert_eq!(
            NotificationThread::Custom(name),
            NotificationThread::custom("evening").unwrap()
        );
    }

    #[test]
    fn default_is_disabled() {
        assert_eq!(NotificationsConfig::default(), NotificationsConfig::Disabled);
        assert!(NotificationsConfig::task().is_enabled());
    }
}
