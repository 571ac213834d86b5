//! Typed accessors over `serde_json` objects that report errors with field paths.

use serde_json::{Map, Value};
use studyplan_core::ValidationError;
use uuid::Uuid;

use crate::error::{CodecError, Result};

pub(crate) type Object = Map<String, Value>;

/// Discriminator keys, tried in order.
const DISCRIMINATOR_KEYS: &[&str] = &["type", "_type"];

pub(crate) fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

fn json_type(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Parse raw JSON text; syntax errors are shape errors at the root.
pub(crate) fn parse_text(text: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(|e| CodecError::shape("", format!("invalid JSON: {}", e)))
}

pub(crate) fn object<'a>(value: &'a Value, path: &str) -> Result<&'a Object> {
    value.as_object().ok_or_else(|| {
        CodecError::shape(path, format!("expected an object, found {}", json_type(value)))
    })
}

/// The variant tag of a tagged object.
pub(crate) fn discriminator<'a>(obj: &'a Object, path: &str) -> Result<&'a str> {
    let (key, raw) = DISCRIMINATOR_KEYS
        .iter()
        .find_map(|k| optional(obj, k).map(|v| (*k, v)))
        .ok_or_else(|| CodecError::shape(path, "missing discriminator field 'type'"))?;
    string(raw, &join(path, key))
}

/// A field that may be absent. `null` counts as absent.
pub(crate) fn optional<'a>(obj: &'a Object, key: &str) -> Option<&'a Value> {
    obj.get(key).filter(|v| !v.is_null())
}

pub(crate) fn required<'a>(obj: &'a Object, key: &str, path: &str) -> Result<&'a Value> {
    optional(obj, key).ok_or_else(|| CodecError::shape(path, format!("missing required field '{}'", key)))
}

pub(crate) fn string<'a>(value: &'a Value, path: &str) -> Result<&'a str> {
    value.as_str().ok_or_else(|| {
        CodecError::shape(path, format!("expected a string, found {}", json_type(value)))
    })
}

pub(crate) fn boolean(value: &Value, path: &str) -> Result<bool> {
    value.as_bool().ok_or_else(|| {
        CodecError::shape(path, format!("expected a boolean, found {}", json_type(value)))
    })
}

/// Any JSON integer. Floats and other types are shape errors.
pub(crate) fn integer(value: &Value, path: &str) -> Result<i64> {
    if let Some(i) = value.as_i64() {
        return Ok(i);
    }
    if value.is_u64() {
        return Err(ValidationError::new(path, value, "a 64-bit signed integer").into());
    }
    Err(CodecError::shape(
        path,
        format!("expected an integer, found {}", json_type(value)),
    ))
}

pub(crate) fn unsigned(value: &Value, path: &str) -> Result<u32> {
    let i = integer(value, path)?;
    u32::try_from(i).map_err(|_| ValidationError::new(path, i, "a non-negative integer").into())
}

pub(crate) fn signed(value: &Value, path: &str) -> Result<i32> {
    let i = integer(value, path)?;
    i32::try_from(i).map_err(|_| ValidationError::new(path, i, "a 32-bit integer").into())
}

pub(crate) fn uuid(value: &Value, path: &str) -> Result<Uuid> {
    let s = string(value, path)?;
    Uuid::parse_str(s).map_err(|_| ValidationError::new(path, format!("{:?}", s), "a UUID").into())
}

/// Optional unsigned field, `None` when absent.
pub(crate) fn opt_unsigned(obj: &Object, key: &str, path: &str) -> Result<Option<u32>> {
    optional(obj, key)
        .map(|v| unsigned(v, &join(path, key)))
        .transpose()
}

/// Optional signed field, `None` when absent.
pub(crate) fn opt_signed(obj: &Object, key: &str, path: &str) -> Result<Option<i32>> {
    optional(obj, key)
        .map(|v| signed(v, &join(path, key)))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(v: Value) -> Object {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn discriminator_falls_back_to_underscore_type() {
        let o = obj(json!({"_type": "daily"}));
        assert_eq!(discriminator(&o, "").unwrap(), "daily");

        let o = obj(json!({"type": "weekly", "_type": "daily"}));
        assert_eq!(discriminator(&o, "").unwrap(), "weekly");
    }

    #[test]
    fn null_type_falls_back_to_underscore_type() {
        let o = obj(json!({"type": null, "_type": "daily", "hour": 8}));
        assert_eq!(discriminator(&o, "").unwrap(), "daily");

        let err = discriminator(&obj(json!({"type": null})), "pattern").unwrap_err();
        assert!(matches!(err, CodecError::Shape { ref path, .. } if path == "pattern"));
    }

    #[test]
    fn missing_or_non_string_discriminator_is_shape() {
        let err = discriminator(&obj(json!({"hour": 8})), "pattern").unwrap_err();
        assert_eq!(err.kind(), "shape");
        assert_eq!(err.path(), "pattern");

        let err = discriminator(&obj(json!({"type": 3})), "pattern").unwrap_err();
        assert_eq!(err.kind(), "shape");
        assert_eq!(err.path(), "pattern.type");
    }

    #[test]
    fn integers_distinguish_shape_from_range() {
        assert_eq!(integer(&json!(8), "hour").unwrap(), 8);
        assert_eq!(integer(&json!("8"), "hour").unwrap_err().kind(), "shape");
        assert_eq!(integer(&json!(8.5), "hour").unwrap_err().kind(), "shape");
        assert_eq!(unsigned(&json!(-1), "hour").unwrap_err().kind(), "validation");
        assert_eq!(signed(&json!(1u64 << 40), "offsetInDays").unwrap_err().kind(), "validation");
        assert_eq!(integer(&json!(u64::MAX), "x").unwrap_err().kind(), "validation");
    }

    #[test]
    fn null_is_treated_as_absent() {
        let o = obj(json!({"minute": null}));
        assert!(optional(&o, "minute").is_none());
        assert_eq!(opt_unsigned(&o, "minute", "").unwrap(), None);
    }

    #[test]
    fn malformed_uuid_is_validation() {
        let err = uuid(&json!("not-a-uuid"), "event.componentId").unwrap_err();
        assert_eq!(err.kind(), "validation");
        assert_eq!(err.path(), "event.componentId");
    }

    #[test]
    fn join_handles_root() {
        assert_eq!(join("", "hour"), "hour");
        assert_eq!(join("pattern", "hour"), "pattern.hour");
    }
}
