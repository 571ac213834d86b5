//! The component schedule aggregate.

use uuid::Uuid;

use super::{CompletionPolicy, NotificationsConfig, ScheduleDefinition};

/// Schedule content without identity: what a client submits on create or replace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleBody {
    pub definition: ScheduleDefinition,
    pub completion_policy: CompletionPolicy,
    pub notifications: NotificationsConfig,
}

/// A schedule owned by exactly one component.
///
/// `id` and `component_id` are fixed at construction. The body can only be
/// swapped out wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentSchedule {
    id: Uuid,
    component_id: Uuid,
    body: ScheduleBody,
}

impl ComponentSchedule {
    pub fn new(id: Uuid, component_id: Uuid, body: ScheduleBody) -> Self {
        Self {
            id,
            component_id,
            body,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn component_id(&self) -> Uuid {
        self.component_id
    }

    pub fn body(&self) -> &ScheduleBody {
        &self.body
    }

    pub fn definition(&self) -> &ScheduleDefinition {
        &self.body.definition
    }

    pub fn completion_policy(&self) -> CompletionPolicy {
        self.body.completion_policy
    }

    pub fn notifications(&self) -> &NotificationsConfig {
        &self.body.notifications
    }

    /// Full replacement. Returns the previous body.
    pub fn replace_body(&mut self, body: ScheduleBody) -> ScheduleBody {
        std::mem::replace(&mut self.body, body)
    }

    pub fn into_body(self) -> ScheduleBody {
        self.body
    }
}
