//! Study lifecycle event codec.

use serde_json::{json, Value};
use studyplan_core::StudyLifecycleEvent;

use crate::error::{CodecError, Result};
use crate::fields::{self, join};

pub(crate) fn decode_event(value: &Value, path: &str) -> Result<StudyLifecycleEvent> {
    let obj = fields::object(value, path)?;
    match fields::discriminator(obj, path)? {
        "enrollment" => Ok(StudyLifecycleEvent::Enrollment),
        "activation" => Ok(StudyLifecycleEvent::Activation),
        "unenrollment" => Ok(StudyLifecycleEvent::Unenrollment),
        "studyEnd" => Ok(StudyLifecycleEvent::StudyEnd),
        "completedTask" => {
            let raw = fields::required(obj, "componentId", path)?;
            let component_id = fields::uuid(raw, &join(path, "componentId"))?;
            Ok(StudyLifecycleEvent::CompletedTask { component_id })
        }
        other => Err(CodecError::unsupported(path, "lifecycleEvent", other)),
    }
}

pub(crate) fn encode_event(event: &StudyLifecycleEvent) -> Value {
    match event {
        StudyLifecycleEvent::CompletedTask { component_id } => json!({
            "type": event.tag(),
            "componentId": component_id.to_string(),
        }),
        _ => json!({ "type": event.tag() }),
    }
}
