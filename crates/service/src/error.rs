use studyplan_codec::CodecError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("Component {0} cannot carry schedules")]
    NotSchedulable(Uuid),

    #[error("Schedule not found: {0}")]
    NotFound(Uuid),

    #[error("Schedule already exists: {0}")]
    Conflict(Uuid),

    #[error("Schedule {schedule_id} does not belong to component {component_id}")]
    ComponentMismatch { schedule_id: Uuid, component_id: Uuid },
}

impl ServiceError {
    /// Whether the caller sent something wrong, as opposed to referring to a missing resource.
    pub fn is_client_input(&self) -> bool {
        matches!(self, ServiceError::Codec(_) | ServiceError::NotSchedulable(_))
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
