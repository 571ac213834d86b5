//! Schedule service: the collaborators around the schedule codec.
//!
//! This crate provides:
//! - `ScheduleStore`: persistence port, with an in-memory adapter
//! - `SchedulableGate`: which components may carry schedules
//! - `ScheduleService`: decode → gate → store → stamped encode

pub mod error;
pub mod gate;
pub mod service;
pub mod store;

pub use error::{Result, ServiceError};
pub use gate::{ComponentKind, SchedulableGate, StaticComponentGate};
pub use service::ScheduleService;
pub use store::{InMemoryScheduleStore, ScheduleStore, StoredSchedule};
