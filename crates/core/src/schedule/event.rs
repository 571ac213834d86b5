//! Study lifecycle anchors for event-relative one-time schedules.

use std::fmt;

use uuid::Uuid;

/// A named moment in a participant's study timeline.
///
/// `CompletedTask` references a sibling component by id. Whether that
/// component exists, or whether references form a cycle, is checked by the
/// owning service, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StudyLifecycleEvent {
    Enrollment,
    Activation,
    Unenrollment,
    StudyEnd,
    CompletedTask { component_id: Uuid },
}

impl StudyLifecycleEvent {
    /// Wire discriminator for this event.
    pub fn tag(&self) -> &'static str {
        match self {
            StudyLifecycleEvent::Enrollment => "enrollment",
            StudyLifecycleEvent::Activation => "activation",
            StudyLifecycleEvent::Unenrollment => "unenrollment",
            StudyLifecycleEvent::StudyEnd => "studyEnd",
            StudyLifecycleEvent::CompletedTask { .. } => "completedTask",
        }
    }

    /// The component this event waits on, if any.
    pub fn referenced_component(&self) -> Option<Uuid> {
        match self {
            StudyLifecycleEvent::CompletedTask { component_id } => Some(*component_id),
            _ => None,
        }
    }
}

impl fmt::Display for StudyLifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StudyLifecycleEvent::CompletedTask { component_id } => {
                write!(f, "completedTask({})", component_id)
            }
            other => write!(f, "{}", other.tag()),
        }
    }
}
