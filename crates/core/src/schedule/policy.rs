//! Completion-allowance policy enum.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Window, relative to an occurrence, in which a participant may complete it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CompletionPolicy {
    SameDay,
    AfterStart,
    SameDayAfterStart,
    DuringEvent,
    Anytime,
}

impl CompletionPolicy {
    pub const ALL: [CompletionPolicy; 5] = [
        CompletionPolicy::SameDay,
        CompletionPolicy::AfterStart,
        CompletionPolicy::SameDayAfterStart,
        CompletionPolicy::DuringEvent,
        CompletionPolicy::Anytime,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CompletionPolicy::SameDay => "sameDay",
            CompletionPolicy::AfterStart => "afterStart",
            CompletionPolicy::SameDayAfterStart => "sameDayAfterStart",
            CompletionPolicy::DuringEvent => "duringEvent",
            CompletionPolicy::Anytime => "anytime",
        }
    }
}

impl fmt::Display for CompletionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CompletionPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "sameDay" => Ok(CompletionPolicy::SameDay),
            "afterStart" => Ok(CompletionPolicy::AfterStart),
            "sameDayAfterStart" => Ok(CompletionPolicy::SameDayAfterStart),
            "duringEvent" => Ok(CompletionPolicy::DuringEvent),
            "anytime" => Ok(CompletionPolicy::Anytime),
            other => Err(format!("unknown completion policy: '{}'", other)),
        }
    }
}
