//! Check that a component is of a type allowed to carry schedules.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kinds of study component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComponentKind {
    Informational,
    Questionnaire,
    HealthData,
}

impl ComponentKind {
    /// Health-data collection runs continuously and is never scheduled.
    pub fn is_schedulable(&self) -> bool {
        !matches!(self, ComponentKind::HealthData)
    }
}

#[async_trait]
pub trait SchedulableGate: Send + Sync {
    async fn is_schedulable(&self, component_id: Uuid) -> bool;
}

/// Gate over a fixed id → kind table. Unknown components are rejected.
#[derive(Debug, Clone, Default)]
pub struct StaticComponentGate {
    kinds: HashMap<Uuid, ComponentKind>,
}

impl StaticComponentGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, component_id: Uuid, kind: ComponentKind) -> Self {
        self.kinds.insert(component_id, kind);
        self
    }

    pub fn register(&mut self, component_id: Uuid, kind: ComponentKind) {
        self.kinds.insert(component_id, kind);
    }
}

#[async_trait]
impl SchedulableGate for StaticComponentGate {
    async fn is_schedulable(&self, component_id: Uuid) -> bool {
        self.kinds
            .get(&component_id)
            .is_some_and(|kind| kind.is_schedulable())
    }
}
