//! Notifications codec: the full tagged form and the boolean boundary.

use serde_json::{json, Value};
use studyplan_core::{NotificationThread, NotificationsConfig};

use crate::error::{CodecError, Result};
use crate::fields::{self, join, Object};
use crate::time::{decode_time, encode_time};

/// Collapse notifications to the `notification: bool` flag.
///
/// Lossy: thread and time are dropped. Any enabled config maps to `true`.
pub fn notification_flag(config: &NotificationsConfig) -> bool {
    config.is_enabled()
}

/// Expand the boolean flag. `true` is always task-thread at the occurrence time.
pub fn notifications_from_flag(flag: bool) -> NotificationsConfig {
    if flag {
        NotificationsConfig::task()
    } else {
        NotificationsConfig::Disabled
    }
}

fn decode_thread(value: &Value, path: &str) -> Result<NotificationThread> {
    let obj = fields::object(value, path)?;
    match fields::discriminator(obj, path)? {
        "global" => Ok(NotificationThread::Global),
        "task" => Ok(NotificationThread::Task),
        "none" => Ok(NotificationThread::None),
        "custom" => {
            let name_path = join(path, "name");
            let name = fields::string(fields::required(obj, "name", path)?, &name_path)?;
            Ok(NotificationThread::custom(name).map_err(|e| e.within(path))?)
        }
        other => Err(CodecError::unsupported(path, "notificationThread", other)),
    }
}

fn encode_thread(thread: &NotificationThread) -> Value {
    match thread {
        NotificationThread::Custom(name) => json!({ "type": thread.tag(), "name": name.as_str() }),
        _ => json!({ "type": thread.tag() }),
    }
}

/// Decode the full notifications form handed to the execution engine.
pub fn decode_notifications(value: &Value) -> Result<NotificationsConfig> {
    let obj = fields::object(value, "")?;
    match fields::discriminator(obj, "")? {
        "disabled" => Ok(NotificationsConfig::Disabled),
        "enabled" => {
            let thread = decode_thread(fields::required(obj, "thread", "")?, "thread")?;
            let time = fields::optional(obj, "time")
                .map(|v| decode_time(v, "time"))
                .transpose()?;
            Ok(NotificationsConfig::Enabled { thread, time })
        }
        other => Err(CodecError::unsupported("", "notificationsConfig", other)),
    }
}

/// [`decode_notifications`] over raw JSON text.
pub fn decode_notifications_str(text: &str) -> Result<NotificationsConfig> {
    decode_notifications(&fields::parse_text(text)?)
}

pub fn encode_notifications(config: &NotificationsConfig) -> Value {
    match config {
        NotificationsConfig::Disabled => json!({ "type": "disabled" }),
        NotificationsConfig::Enabled { thread, time } => {
            let mut out = Object::new();
            out.insert("type".into(), json!("enabled"));
            out.insert("thread".into(), encode_thread(thread));
            if let Some(time) = time {
                out.insert("time".into(), encode_time(time));
            }
            Value::Object(out)
        }
    }
}
