//! One-time schedule and schedule definition codec.

use serde_json::{json, Value};
use studyplan_core::{CalendarOffset, OneTimeSchedule, ScheduleDefinition};

use crate::error::{CodecError, Result};
use crate::event::{decode_event, encode_event};
use crate::fields::{self, join, Object};
use crate::pattern::{decode_pattern, encode_pattern};
use crate::time::{
    decode_date_components, decode_offset, decode_time, encode_date_components, encode_offset,
    encode_time,
};

pub(crate) fn decode_once(value: &Value, path: &str) -> Result<OneTimeSchedule> {
    let obj = fields::object(value, path)?;
    match fields::discriminator(obj, path)? {
        "date" => {
            let raw = fields::required(obj, "dateComponents", path)?;
            let date = decode_date_components(raw, &join(path, "dateComponents"))?;
            Ok(OneTimeSchedule::Date(date))
        }
        "event" => {
            let event = decode_event(fields::required(obj, "event", path)?, &join(path, "event"))?;
            let offset_in_days = fields::opt_signed(obj, "offsetInDays", path)?.unwrap_or(0);
            let time = fields::optional(obj, "time")
                .map(|v| decode_time(v, &join(path, "time")))
                .transpose()?;
            Ok(OneTimeSchedule::Event {
                event,
                offset_in_days,
                time,
            })
        }
        other => Err(CodecError::unsupported(path, "oneTimeSchedule", other)),
    }
}

pub(crate) fn encode_once(once: &OneTimeSchedule) -> Value {
    let mut out = Object::new();
    out.insert("type".into(), json!(once.tag()));
    match once {
        OneTimeSchedule::Date(date) => {
            out.insert("dateComponents".into(), encode_date_components(date));
        }
        OneTimeSchedule::Event {
            event,
            offset_in_days,
            time,
        } => {
            out.insert("event".into(), encode_event(event));
            if *offset_in_days != 0 {
                out.insert("offsetInDays".into(), json!(offset_in_days));
            }
            if let Some(time) = time {
                out.insert("time".into(), encode_time(time));
            }
        }
    }
    Value::Object(out)
}

/// Decode a `ScheduleDefinition` found at `path`.
pub(crate) fn decode_definition_at(value: &Value, path: &str) -> Result<ScheduleDefinition> {
    let obj = fields::object(value, path)?;
    let tag = fields::discriminator(obj, path)?;
    let pattern_path = join(path, "pattern");
    match tag {
        "once" => {
            let pattern = fields::required(obj, "pattern", path)?;
            Ok(ScheduleDefinition::Once(decode_once(pattern, &pattern_path)?))
        }
        "repeated" => {
            let pattern = decode_pattern(fields::required(obj, "pattern", path)?, &pattern_path)?;
            let offset = match fields::optional(obj, "offset") {
                Some(v) => decode_offset(v, &join(path, "offset"))?,
                None => CalendarOffset::ZERO,
            };
            Ok(ScheduleDefinition::Repeated { pattern, offset })
        }
        other => Err(CodecError::unsupported(path, "scheduleDefinition", other)),
    }
}

/// Decode a bare schedule definition.
pub fn decode_definition(value: &Value) -> Result<ScheduleDefinition> {
    decode_definition_at(value, "")
}

/// Encode a schedule definition, eliding default-valued fields at every level.
pub fn encode_definition(definition: &ScheduleDefinition) -> Value {
    let mut out = Object::new();
    out.insert("type".into(), json!(definition.tag()));
    match definition {
        ScheduleDefinition::Once(once) => {
            out.insert("pattern".into(), encode_once(once));
        }
        ScheduleDefinition::Repeated { pattern, offset } => {
            out.insert("pattern".into(), encode_pattern(pattern));
            if let Some(offset) = encode_offset(offset) {
                out.insert("offset".into(), offset);
            }
        }
    }
    Value::Object(out)
}
