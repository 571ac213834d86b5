//! [`ScheduleService`]: JSON in, JSON out, over a store and a gate.

use serde_json::Value;
use tracing::{debug, info, warn};
use uuid::Uuid;

use studyplan_codec::{decode_schedule, encode_stamped};
use studyplan_core::ComponentSchedule;

use crate::error::{Result, ServiceError};
use crate::gate::SchedulableGate;
use crate::store::ScheduleStore;

/// Owns the create / replace / read / delete flow for component schedules.
///
/// Payloads are decoded with the body codec; responses are always stamped
/// with `id` and `componentId`.
pub struct ScheduleService<S, G> {
    store: S,
    gate: G,
}

impl<S: ScheduleStore, G: SchedulableGate> ScheduleService<S, G> {
    pub fn new(store: S, gate: G) -> Self {
        Self { store, gate }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Attach a new schedule to `component_id` and return it stamped with a fresh id.
    pub async fn create(&self, component_id: Uuid, payload: &Value) -> Result<Value> {
        if !self.gate.is_schedulable(component_id).await {
            warn!(component_id = %component_id, "rejected schedule for non-schedulable component");
            return Err(ServiceError::NotSchedulable(component_id));
        }

        let body = decode_schedule(payload)?;
        if let Some(anchor) = body.definition.referenced_component() {
            debug!(component_id = %component_id, anchor = %anchor, "schedule waits on another component");
        }

        let schedule = ComponentSchedule::new(Uuid::new_v4(), component_id, body);
        let stored = self.store.insert(schedule).await?;
        info!(
            schedule_id = %stored.schedule.id(),
            component_id = %component_id,
            definition = stored.schedule.definition().tag(),
            "created schedule"
        );
        Ok(encode_stamped(&stored.schedule))
    }

    /// Replace the whole body of schedule `id`, which must belong to `component_id`.
    pub async fn replace(&self, component_id: Uuid, id: Uuid, payload: &Value) -> Result<Value> {
        let existing = self
            .store
            .get(id)
            .await?
            .ok_or(ServiceError::NotFound(id))?;
        if existing.schedule.component_id() != component_id {
            return Err(ServiceError::ComponentMismatch {
                schedule_id: id,
                component_id,
            });
        }

        let body = decode_schedule(payload)?;
        let stored = self.store.replace(id, body).await?;
        info!(schedule_id = %id, component_id = %component_id, "replaced schedule");
        Ok(encode_stamped(&stored.schedule))
    }

    pub async fn get(&self, id: Uuid) -> Result<Value> {
        let stored = self
            .store
            .get(id)
            .await?
            .ok_or(ServiceError::NotFound(id))?;
        Ok(encode_stamped(&stored.schedule))
    }

    pub async fn list_for_component(&self, component_id: Uuid) -> Result<Vec<Value>> {
        let stored = self.store.list_for_component(component_id).await?;
        Ok(stored.iter().map(|s| encode_stamped(&s.schedule)).collect())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.store.delete(id).await? {
            return Err(ServiceError::NotFound(id));
        }
        info!(schedule_id = %id, "deleted schedule");
        Ok(())
    }

    /// Remove every schedule of a deleted component.
    pub async fn delete_for_component(&self, component_id: Uuid) -> Result<usize> {
        let removed = self.store.delete_for_component(component_id).await?;
        info!(component_id = %component_id, removed, "deleted component schedules");
        Ok(removed)
    }
}
