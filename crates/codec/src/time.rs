//! Time-of-day, date components, and calendar offsets.

use serde_json::{json, Value};
use studyplan_core::{CalendarOffset, DateComponents, ScheduleTime};

use crate::error::Result;
use crate::fields::{self, join, Object};

/// Read `hour`/`minute`/`second` from an object that carries them inline.
pub(crate) fn decode_time_fields(obj: &Object, path: &str) -> Result<ScheduleTime> {
    let hour = fields::unsigned(fields::required(obj, "hour", path)?, &join(path, "hour"))?;
    let minute = fields::opt_unsigned(obj, "minute", path)?.unwrap_or(0);
    let second = fields::opt_unsigned(obj, "second", path)?.unwrap_or(0);
    Ok(ScheduleTime::new(hour, minute, second).map_err(|e| e.within(path))?)
}

pub(crate) fn encode_time_fields(out: &mut Object, time: &ScheduleTime) {
    out.insert("hour".into(), json!(time.hour()));
    if time.minute() != 0 {
        out.insert("minute".into(), json!(time.minute()));
    }
    if time.second() != 0 {
        out.insert("second".into(), json!(time.second()));
    }
}

/// Decode a standalone `{hour, minute?, second?}` object.
pub(crate) fn decode_time(value: &Value, path: &str) -> Result<ScheduleTime> {
    decode_time_fields(fields::object(value, path)?, path)
}

pub(crate) fn encode_time(time: &ScheduleTime) -> Value {
    let mut out = Object::new();
    encode_time_fields(&mut out, time);
    Value::Object(out)
}

pub(crate) fn decode_date_components(value: &Value, path: &str) -> Result<DateComponents> {
    let obj = fields::object(value, path)?;
    let year = fields::opt_signed(obj, "year", path)?;
    let month = fields::opt_unsigned(obj, "month", path)?;
    let day = fields::opt_unsigned(obj, "day", path)?;
    Ok(DateComponents::new(year, month, day).map_err(|e| e.within(path))?)
}

pub(crate) fn encode_date_components(date: &DateComponents) -> Value {
    let mut out = Object::new();
    if let Some(year) = date.year() {
        out.insert("year".into(), json!(year));
    }
    if let Some(month) = date.month() {
        out.insert("month".into(), json!(month));
    }
    if let Some(day) = date.day() {
        out.insert("day".into(), json!(day));
    }
    Value::Object(out)
}

/// Wire keys of a calendar offset with their values, in canonical order.
fn offset_parts(o: &CalendarOffset) -> [(&'static str, i32); 6] {
    [
        ("year", o.years),
        ("month", o.months),
        ("day", o.days),
        ("hour", o.hours),
        ("minute", o.minutes),
        ("second", o.seconds),
    ]
}

pub(crate) fn decode_offset(value: &Value, path: &str) -> Result<CalendarOffset> {
    let obj = fields::object(value, path)?;
    let get = |key: &str| -> Result<i32> { Ok(fields::opt_signed(obj, key, path)?.unwrap_or(0)) };
    Ok(CalendarOffset {
        years: get("year")?,
        months: get("month")?,
        days: get("day")?,
        hours: get("hour")?,
        minutes: get("minute")?,
        seconds: get("second")?,
    })
}

/// Encode an offset, eliding zero components. `None` for the zero offset.
pub(crate) fn encode_offset(offset: &CalendarOffset) -> Option<Value> {
    if offset.is_zero() {
        return None;
    }
    let mut out = Object::new();
    for (key, v) in offset_parts(offset) {
        if v != 0 {
            out.insert(key.into(), json!(v));
        }
    }
    Some(Value::Object(out))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_defaults_minute_and_second() {
        let t = decode_time(&json!({"hour": 8}), "time").unwrap();
        assert_eq!(t, ScheduleTime::at_hour(8).unwrap());
        assert_eq!(encode_time(&t), json!({"hour": 8}));
    }

    #[test]
    fn explicit_zero_minute_is_elided_on_encode() {
        let t = decode_time(&json!({"hour": 8, "minute": 0, "second": 0}), "time").unwrap();
        assert_eq!(encode_time(&t), json!({"hour": 8}));
    }

    #[test]
    fn missing_hour_is_shape() {
        let err = decode_time(&json!({"minute": 5}), "time").unwrap_err();
        assert_eq!(err.kind(), "shape");
    }

    #[test]
    fn out_of_range_minute_carries_full_path() {
        let err = decode_time(&json!({"hour": 8, "minute": 75}), "pattern.time").unwrap_err();
        assert_eq!(err.kind(), "validation");
        assert_eq!(err.path(), "pattern.time.minute");
    }

    #[test]
    fn offset_elides_zero_parts() {
        let offset = decode_offset(&json!({"day": 3, "hour": 0}), "offset").unwrap();
        assert_eq!(offset, CalendarOffset::days(3));
        assert_eq!(encode_offset(&offset), Some(json!({"day": 3})));
        assert_eq!(encode_offset(&CalendarOffset::ZERO), None);
    }

    #[test]
    fn offset_allows_negative_components() {
        let offset = decode_offset(&json!({"month": -1}), "offset").unwrap();
        assert_eq!(offset.months, -1);
    }

    #[test]
    fn date_components_keep_only_present_parts() {
        let d = decode_date_components(&json!({"year": 2025, "day": 4}), "dc").unwrap();
        assert_eq!(d.month(), None);
        assert_eq!(encode_date_components(&d), json!({"year": 2025, "day": 4}));
    }

    #[test]
    fn date_components_validate_month() {
        let err = decode_date_components(&json!({"month": 13}), "pattern.dateComponents").unwrap_err();
        assert_eq!(err.path(), "pattern.dateComponents.month");
    }
}
