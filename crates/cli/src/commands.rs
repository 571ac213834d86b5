use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use studyplan_codec::{
    decode_notifications_str, decode_schedule_str, encode_notifications, encode_schedule,
    encode_stamped, CodecError,
};
use studyplan_core::ComponentSchedule;

/// Canonical (default-elided) encoding of a schedule body.
pub fn normalize(text: &str) -> Result<Value, CodecError> {
    let body = decode_schedule_str(text)?;
    debug!(definition = body.definition.tag(), "decoded schedule body");
    Ok(encode_schedule(&body))
}

/// One-line verdict for `validate`. `Err` carries the report for a rejected payload.
pub fn validate(text: &str) -> Result<String, String> {
    match decode_schedule_str(text) {
        Ok(_) => Ok("ok".to_string()),
        Err(e) => Err(describe(&e)),
    }
}

pub fn describe(err: &CodecError) -> String {
    format!("{} error at {}: {}", err.kind(), err.path(), err)
}

pub fn stamp(text: &str, component_id: Uuid, id: Option<Uuid>) -> Result<Value, CodecError> {
    let body = decode_schedule_str(text)?;
    let id = id.unwrap_or_else(Uuid::new_v4);
    Ok(encode_stamped(&ComponentSchedule::new(id, component_id, body)))
}

pub fn notifications(text: &str) -> Result<Value, CodecError> {
    Ok(encode_notifications(&decode_notifications_str(text)?))
}

pub fn render(value: &Value, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const WEEKLY: &str = r#"{
        "scheduleDefinition": {
            "type": "repeated",
            "pattern": {"type": "weekly", "interval": 1, "weekday": "monday", "hour": 14, "minute": 30, "second": 0}
        },
        "completionPolicy": "sameDay",
        "notification": true
    }"#;

    #[test]
    fn normalize_elides_defaults() {
        let value = normalize(WEEKLY).unwrap();
        assert_eq!(
            value["scheduleDefinition"]["pattern"],
            json!({"type": "weekly", "weekday": "monday", "hour": 14, "minute": 30})
        );
        assert_eq!(value["notification"], json!(true));
    }

    #[test]
    fn validate_reports_kind_and_path() {
        assert_eq!(validate(WEEKLY).unwrap(), "ok");

        let report = validate(
            r#"{"scheduleDefinition": {"type": "repeated", "pattern": {"type": "yearly", "hour": 1}},
                "completionPolicy": "sameDay", "notification": false}"#,
        )
        .unwrap_err();
        assert!(report.starts_with("unsupported_variant error at scheduleDefinition.pattern:"));

        let report = validate("[").unwrap_err();
        assert!(report.starts_with("shape error at $:"));
    }

    #[test]
    fn stamp_uses_given_identity() {
        let id = Uuid::new_v4();
        let component_id = Uuid::new_v4();
        let value = stamp(WEEKLY, component_id, Some(id)).unwrap();
        assert_eq!(value["id"], json!(id.to_string()));
        assert_eq!(value["componentId"], json!(component_id.to_string()));
    }

    #[test]
    fn stamp_generates_id_when_absent() {
        let value = stamp(WEEKLY, Uuid::new_v4(), None).unwrap();
        assert!(Uuid::parse_str(value["id"].as_str().unwrap()).is_ok());
    }

    #[test]
    fn notifications_keeps_rich_form() {
        let value = notifications(
            r#"{"_type": "enabled", "thread": {"type": "custom", "name": "evening"}, "time": {"hour": 20, "minute": 0}}"#,
        )
        .unwrap();
        assert_eq!(
            value,
            json!({"type": "enabled", "thread": {"type": "custom", "name": "evening"}, "time": {"hour": 20}})
        );
    }

    #[test]
    fn render_honours_pretty_flag() {
        let value = json!({"a": 1});
        assert_eq!(render(&value, false).unwrap(), r#"{"a":1}"#);
        assert!(render(&value, true).unwrap().contains('\n'));
    }
}
