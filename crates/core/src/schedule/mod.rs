//! Component schedule domain model.
//!
//! Defines the closed type hierarchy describing when a study component occurs:
//! - `ScheduleDefinition`: once (absolute date or lifecycle-relative) or repeated
//! - `RepetitionPattern`: daily / weekly / monthly with interval and time of day
//! - `NotificationsConfig`: disabled, or enabled on a thread at an optional time
//! - `ComponentSchedule`: the aggregate owned by a single component
//!
//! Every constructor that range-checks returns a [`ValidationError`](crate::ValidationError);
//! values are never clamped.

mod component;
mod definition;
mod event;
mod notifications;
mod once;
mod pattern;
mod policy;
mod time;

pub use component::*;
pub use definition::*;
pub use event::*;
pub use notifications::*;
pub use once::*;
pub use pattern::*;
pub use policy::*;
pub use time::*;

pub use chrono::Weekday;
