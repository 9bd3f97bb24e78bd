//! 作业存储操作

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::simulate_latency;
use super::table::{Keyed, Table};
use crate::config::LatencyConfig;
use crate::errors::Result;
use crate::models::assignments::{
    entities::AssignmentEntity,
    requests::{CreateAssignmentRequest, UpdateAssignmentRequest},
};
use crate::storage::EntityStore;
use crate::utils::id::IdGenerator;

impl Keyed for AssignmentEntity {
    fn key(&self) -> &str {
        &self.id
    }
}

pub struct MemoryAssignmentStore {
    rows: Table<AssignmentEntity>,
    ids: Arc<IdGenerator>,
    latency: LatencyConfig,
}

impl MemoryAssignmentStore {
    pub(crate) fn new(latency: LatencyConfig, ids: Arc<IdGenerator>) -> Self {
        Self {
            rows: Table::new("Assignment"),
            ids,
            latency,
        }
    }

    pub(crate) fn insert_seeded(&self, assignment: AssignmentEntity) -> Result<()> {
        self.rows.upsert(assignment)
    }
}

#[async_trait]
impl EntityStore<AssignmentEntity> for MemoryAssignmentStore {
    async fn get_all(&self) -> Result<Vec<AssignmentEntity>> {
        simulate_latency(self.latency.list_ms).await;
        self.rows.all()
    }

    async fn get_by_id(&self, id: &str) -> Result<AssignmentEntity> {
        simulate_latency(self.latency.read_ms).await;
        self.rows.find(id)
    }

    async fn create(&self, draft: CreateAssignmentRequest) -> Result<AssignmentEntity> {
        simulate_latency(self.latency.write_ms).await;
        let assignment = self.rows.insert_new(&self.ids, |id| AssignmentEntity {
            id,
            class_id: draft.class_id,
            title: draft.title,
            description: draft.description,
            due_date: draft.due_date,
            attachments: draft.attachments,
            created_at: chrono::Utc::now(),
        })?;

        debug!(
            "Assignment {} created for class {}",
            assignment.id, assignment.class_id
        );
        Ok(assignment)
    }

    async fn update(&self, id: &str, patch: UpdateAssignmentRequest) -> Result<AssignmentEntity> {
        simulate_latency(self.latency.write_ms).await;
        let assignment = self.rows.modify(id, |row| {
            if let Some(class_id) = patch.class_id {
                row.class_id = class_id;
            }
            if let Some(title) = patch.title {
                row.title = title;
            }
            if let Some(description) = patch.description {
                row.description = description;
            }
            if let Some(due_date) = patch.due_date {
                row.due_date = due_date;
            }
            if let Some(attachments) = patch.attachments {
                row.attachments = attachments;
            }
        })?;

        debug!("Assignment {} updated", id);
        Ok(assignment)
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        simulate_latency(self.latency.write_ms).await;
        self.rows.remove(id)?;
        debug!("Assignment {} deleted", id);
        Ok(true)
    }
}
