//! Repetition pattern codec.

use serde_json::{json, Value};
use studyplan_core::{DayOfMonth, Interval, RepetitionPattern, ValidationError, Weekday};

use crate::error::{CodecError, Result};
use crate::fields::{self, join, Object};
use crate::time::{decode_time_fields, encode_time_fields};

const WEEKDAYS: [(&str, Weekday); 7] = [
    ("monday", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("friday", Weekday::Fri),
    ("saturday", Weekday::Sat),
    ("sunday", Weekday::Sun),
];

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

fn decode_weekday(obj: &Object, path: &str) -> Result<Option<Weekday>> {
    let Some(raw) = fields::optional(obj, "weekday") else {
        return Ok(None);
    };
    let field = join(path, "weekday");
    let name = fields::string(raw, &field)?;
    WEEKDAYS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, d)| Some(*d))
        .ok_or_else(|| ValidationError::new(field, format!("{:?}", name), "monday..sunday").into())
}

fn decode_interval(obj: &Object, path: &str) -> Result<Interval> {
    match fields::opt_unsigned(obj, "interval", path)? {
        Some(n) => Ok(Interval::new(n).map_err(|e| e.within(path))?),
        None => Ok(Interval::ONE),
    }
}

pub(crate) fn decode_pattern(value: &Value, path: &str) -> Result<RepetitionPattern> {
    let obj = fields::object(value, path)?;
    let tag = fields::discriminator(obj, path)?;
    // Reject unknown variants before reading variant fields.
    if !matches!(tag, "daily" | "weekly" | "monthly") {
        return Err(CodecError::unsupported(path, "repetitionPattern", tag));
    }

    let interval = decode_interval(obj, path)?;
    let time = decode_time_fields(obj, path)?;

    let pattern = match tag {
        "daily" => RepetitionPattern::Daily { interval, time },
        "weekly" => RepetitionPattern::Weekly {
            interval,
            weekday: decode_weekday(obj, path)?,
            time,
        },
        _ => {
            let day = fields::opt_unsigned(obj, "day", path)?
                .map(|d| DayOfMonth::new(d).map_err(|e| e.within(path)))
                .transpose()?;
            RepetitionPattern::Monthly { interval, day, time }
        }
    };
    Ok(pattern)
}

pub(crate) fn encode_pattern(pattern: &RepetitionPattern) -> Value {
    let mut out = Object::new();
    out.insert("type".into(), json!(pattern.tag()));
    let interval = pattern.interval();
    if !interval.is_default() {
        out.insert("interval".into(), json!(interval.get()));
    }
    match pattern {
        RepetitionPattern::Daily { .. } => {}
        RepetitionPattern::Weekly { weekday, .. } => {
            if let Some(day) = weekday {
                out.insert("weekday".into(), json!(weekday_name(*day)));
            }
        }
        RepetitionPattern::Monthly { day, .. } => {
            if let Some(day) = day {
                out.insert("day".into(), json!(day.get()));
            }
        }
    }
    encode_time_fields(&mut out, &pattern.time());
    Value::Object(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use studyplan_core::ScheduleTime;

    #[test]
    fn weekday_names_round_trip() {
        for (name, day) in WEEKDAYS {
            assert_eq!(weekday_name(day), name);
        }
    }

    #[test]
    fn unknown_weekday_is_validation() {
        let err = decode_pattern(&json!({"type": "weekly", "weekday": "funday", "hour": 9}), "pattern")
            .unwrap_err();
        assert_eq!(err.kind(), "validation");
        assert_eq!(err.path(), "pattern.weekday");
    }

    #[test]
    fn zero_interval_is_validation() {
        let err = decode_pattern(&json!({"type": "daily", "interval": 0, "hour": 9}), "").unwrap_err();
        assert_eq!(err.kind(), "validation");
        assert_eq!(err.path(), "interval");
    }

    #[test]
    fn monthly_without_day_keeps_none() {
        let p = decode_pattern(&json!({"type": "monthly", "hour": 6}), "").unwrap();
        assert_eq!(
            p,
            RepetitionPattern::Monthly {
                interval: Interval::ONE,
                day: None,
                time: ScheduleTime::at_hour(6).unwrap(),
            }
        );
        assert_eq!(encode_pattern(&p), json!({"type": "monthly", "hour": 6}));
    }

    #[test]
    fn non_default_interval_is_emitted() {
        let p = decode_pattern(&json!({"type": "weekly", "interval": 2, "weekday": "friday", "hour": 17, "second": 30}), "")
            .unwrap();
        assert_eq!(
            encode_pattern(&p),
            json!({"type": "weekly", "interval": 2, "weekday": "friday", "hour": 17, "second": 30})
        );
    }

    #[test]
    fn unknown_variant_wins_over_missing_fields() {
        let err = decode_pattern(&json!({"type": "yearly"}), "").unwrap_err();
        assert_eq!(err.kind(), "unsupported_variant");
    }
}
