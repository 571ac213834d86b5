//! JSON wire codec for component schedules.
//!
//! This crate provides:
//! - Decoding with documented defaults substituted for absent fields
//!   (`interval` = 1, `minute`/`second` = 0, `offsetInDays` = 0, zero `offset`)
//! - Encoding that omits every field equal to its default
//! - Stamped encode/decode carrying the resource's `id` and `componentId`
//! - The boolean `notification` boundary and the full notifications form
//!
//! Errors are split into shape, validation and unsupported-variant classes
//! (see [`CodecError`]). Decoding is all-or-nothing.

mod definition;
mod error;
mod event;
mod fields;
mod notifications;
mod pattern;
mod schedule;
mod time;

use serde_json::Value;
use studyplan_core::{OneTimeSchedule, RepetitionPattern};

pub use definition::{decode_definition, encode_definition};
pub use error::{CodecError, Result};
pub use notifications::{
    decode_notifications, decode_notifications_str, encode_notifications, notification_flag, notifications_from_flag,
};
pub use schedule::{
    decode_schedule, decode_schedule_str, decode_stamped, decode_stamped_str, encode_schedule,
    encode_stamped,
};

/// Decode a bare repetition pattern object.
pub fn decode_repetition(value: &Value) -> Result<RepetitionPattern> {
    pattern::decode_pattern(value, "")
}

pub fn encode_repetition(pattern: &RepetitionPattern) -> Value {
    pattern::encode_pattern(pattern)
}

/// Decode a bare one-time schedule object.
pub fn decode_one_time(value: &Value) -> Result<OneTimeSchedule> {
    definition::decode_once(value, "")
}

pub fn encode_one_time(once: &OneTimeSchedule) -> Value {
    definition::encode_once(once)
}
