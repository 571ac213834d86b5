//! Schedule persistence port and an in-process adapter.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use studyplan_core::{ComponentSchedule, ScheduleBody};

use crate::error::{Result, ServiceError};

/// A schedule as held by a store, with bookkeeping timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredSchedule {
    pub schedule: ComponentSchedule,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Persistence for component schedules.
///
/// Implementations decide how concurrent writers are resolved; the
/// in-memory adapter is last-writer-wins.
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    /// Insert a new schedule. Fails with `Conflict` if the id is taken.
    async fn insert(&self, schedule: ComponentSchedule) -> Result<StoredSchedule>;

    /// Replace the body of an existing schedule, keeping its identity.
    async fn replace(&self, id: Uuid, body: ScheduleBody) -> Result<StoredSchedule>;

    async fn get(&self, id: Uuid) -> Result<Option<StoredSchedule>>;

    /// Returns `false` if nothing was stored under `id`.
    async fn delete(&self, id: Uuid) -> Result<bool>;

    /// Schedules owned by a component, oldest first.
    async fn list_for_component(&self, component_id: Uuid) -> Result<Vec<StoredSchedule>>;

    /// Cascade for component deletion. Returns how many schedules were removed.
    async fn delete_for_component(&self, component_id: Uuid) -> Result<usize>;
}

/// `HashMap`-backed store behind a `tokio` read-write lock.
#[derive(Default)]
pub struct InMemoryScheduleStore {
    schedules: RwLock<HashMap<Uuid, StoredSchedule>>,
}

impl InMemoryScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.schedules.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.schedules.read().await.is_empty()
    }
}

#[async_trait]
impl ScheduleStore for InMemoryScheduleStore {
    async fn insert(&self, schedule: ComponentSchedule) -> Result<StoredSchedule> {
        let mut schedules = self.schedules.write().await;
        let id = schedule.id();
        if schedules.contains_key(&id) {
            return Err(ServiceError::Conflict(id));
        }
        let now = Utc::now();
        let stored = StoredSchedule {
            schedule,
            created_at: now,
            updated_at: now,
        };
        schedules.insert(id, stored.clone());
        Ok(stored)
    }

    async fn replace(&self, id: Uuid, body: ScheduleBody) -> Result<StoredSchedule> {
        let mut schedules = self.schedules.write().await;
        let stored = schedules.get_mut(&id).ok_or(ServiceError::NotFound(id))?;
        stored.schedule.replace_body(body);
        stored.updated_at = Utc::now();
        Ok(stored.clone())
    }

    async fn get(&self, id: Uuid) -> Result<Option<StoredSchedule>> {
        Ok(self.schedules.read().await.get(&id).cloned())
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        Ok(self.schedules.write().await.remove(&id).is_some())
    }

    async fn list_for_component(&self, component_id: Uuid) -> Result<Vec<StoredSchedule>> {
        let schedules = self.schedules.read().await;
        let mut owned: Vec<StoredSchedule> = schedules
            .values()
            .filter(|s| s.schedule.component_id() == component_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.schedule.id().cmp(&b.schedule.id()))
        });
        Ok(owned)
    }

    async fn delete_for_component(&self, component_id: Uuid) -> Result<usize> {
        let mut schedules = self.schedules.write().await;
        let before = schedules.len();
        schedules.retain(|_, s| s.schedule.component_id() != component_id);
        Ok(before - schedules.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use studyplan_core::{
        CompletionPolicy, NotificationsConfig, OneTimeSchedule, ScheduleDefinition,
        StudyLifecycleEvent,
    };

    fn body(policy: CompletionPolicy) -> ScheduleBody {
        ScheduleBody {
            definition: ScheduleDefinition::Once(OneTimeSchedule::on(StudyLifecycleEvent::Enrollment)),
            completion_policy: policy,
            notifications: NotificationsConfig::Disabled,
        }
    }

    fn schedule(component_id: Uuid) -> ComponentSchedule {
        ComponentSchedule::new(Uuid::new_v4(), component_id, body(CompletionPolicy::Anytime))
    }

    #[tokio::test]
    async fn insert_then_get() {
        let store = InMemoryScheduleStore::new();
        let s = schedule(Uuid::new_v4());
        let stored = store.insert(s.clone()).await.unwrap();
        assert_eq!(stored.created_at, stored.updated_at);
        assert_eq!(store.get(s.id()).await.unwrap().unwrap().schedule, s);
    }

    #[tokio::test]
    async fn duplicate_insert_conflicts() {
        let store = InMemoryScheduleStore::new();
        let s = schedule(Uuid::new_v4());
        store.insert(s.clone()).await.unwrap();
        let err = store.insert(s.clone()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(id) if id == s.id()));
    }

    #[tokio::test]
    async fn replace_swaps_body_only() {
        let store = InMemoryScheduleStore::new();
        let s = schedule(Uuid::new_v4());
        store.insert(s.clone()).await.unwrap();

        let stored = store.replace(s.id(), body(CompletionPolicy::SameDay)).await.unwrap();
        assert_eq!(stored.schedule.id(), s.id());
        assert_eq!(stored.schedule.component_id(), s.component_id());
        assert_eq!(stored.schedule.completion_policy(), CompletionPolicy::SameDay);
        assert!(stored.updated_at >= stored.created_at);
    }

    #[tokio::test]
    async fn replace_missing_is_not_found() {
        let store = InMemoryScheduleStore::new();
        let err = store
            .replace(Uuid::new_v4(), body(CompletionPolicy::SameDay))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_for_component_cascades() {
        let store = InMemoryScheduleStore::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        store.insert(schedule(a)).await.unwrap();
        store.insert(schedule(a)).await.unwrap();
        let keep = schedule(b);
        store.insert(keep.clone()).await.unwrap();

        assert_eq!(store.list_for_component(a).await.unwrap().len(), 2);
        assert_eq!(store.delete_for_component(a).await.unwrap(), 2);
        assert!(store.list_for_component(a).await.unwrap().is_empty());
        assert_eq!(store.len().await, 1);
        assert!(store.delete(keep.id()).await.unwrap());
        assert!(!store.delete(keep.id()).await.unwrap());
        assert!(store.is_empty().await);
    }
}
