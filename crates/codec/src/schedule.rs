//! Component schedule codec: request bodies and stamped resources.

use serde_json::{json, Value};
use studyplan_core::{CompletionPolicy, ComponentSchedule, ScheduleBody};
use tracing::debug;

use crate::definition::{decode_definition_at, encode_definition};
use crate::error::{CodecError, Result};
use crate::fields::{self, Object};
use crate::notifications::{notification_flag, notifications_from_flag};

const DEFINITION: &str = "scheduleDefinition";
const POLICY: &str = "completionPolicy";
const NOTIFICATION: &str = "notification";
const ID: &str = "id";
const COMPONENT_ID: &str = "componentId";

fn decode_body_fields(obj: &Object) -> Result<ScheduleBody> {
    let definition = decode_definition_at(fields::required(obj, DEFINITION, "")?, DEFINITION)?;

    let raw = fields::string(fields::required(obj, POLICY, "")?, POLICY)?;
    let completion_policy = raw
        .parse::<CompletionPolicy>()
        .map_err(|_| CodecError::unsupported(POLICY, "completionPolicy", raw))?;

    let flag = fields::boolean(fields::required(obj, NOTIFICATION, "")?, NOTIFICATION)?;

    Ok(ScheduleBody {
        definition,
        completion_policy,
        notifications: notifications_from_flag(flag),
    })
}

fn encode_body_fields(out: &mut Object, body: &ScheduleBody) {
    out.insert(DEFINITION.into(), encode_definition(&body.definition));
    out.insert(POLICY.into(), json!(body.completion_policy.as_str()));
    out.insert(NOTIFICATION.into(), json!(notification_flag(&body.notifications)));
}

/// Decode a create/replace request body.
///
/// `id` and `componentId` are ignored if present: identity is assigned by the
/// owning service, never taken from the client.
pub fn decode_schedule(value: &Value) -> Result<ScheduleBody> {
    let result = fields::object(value, "").and_then(decode_body_fields);
    if let Err(e) = &result {
        debug!(kind = e.kind(), path = e.path(), error = %e, "rejected schedule body");
    }
    result
}

/// Encode schedule content without identity fields.
pub fn encode_schedule(body: &ScheduleBody) -> Value {
    let mut out = Object::new();
    encode_body_fields(&mut out, body);
    Value::Object(out)
}

/// Decode a stored/transported schedule that carries `id` and `componentId`.
pub fn decode_stamped(value: &Value) -> Result<ComponentSchedule> {
    let result = fields::object(value, "").and_then(|obj| {
        let id = fields::uuid(fields::required(obj, ID, "")?, ID)?;
        let component_id = fields::uuid(fields::required(obj, COMPONENT_ID, "")?, COMPONENT_ID)?;
        let body = decode_body_fields(obj)?;
        Ok(ComponentSchedule::new(id, component_id, body))
    });
    if let Err(e) = &result {
        debug!(kind = e.kind(), path = e.path(), error = %e, "rejected stamped schedule");
    }
    result
}

/// Encode a schedule with its identity. `id` and `componentId` are never elided.
pub fn encode_stamped(schedule: &ComponentSchedule) -> Value {
    let mut out = Object::new();
    out.insert(ID.into(), json!(schedule.id().to_string()));
    out.insert(COMPONENT_ID.into(), json!(schedule.component_id().to_string()));
    encode_body_fields(&mut out, schedule.body());
    Value::Object(out)
}

/// [`decode_schedule`] over raw JSON text.
pub fn decode_schedule_str(text: &str) -> Result<ScheduleBody> {
    decode_schedule(&fields::parse_text(text)?)
}

/// [`decode_stamped`] over raw JSON text.
pub fn decode_stamped_str(text: &str) -> Result<ComponentSchedule> {
    decode_stamped(&fields::parse_text(text)?)
}
