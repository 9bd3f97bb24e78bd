//! 班级存储操作

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::membership::MembershipTable;
use super::simulate_latency;
use super::table::{Keyed, Table};
use crate::config::LatencyConfig;
use crate::errors::Result;
use crate::models::classes::{
    entities::ClassEntity,
    requests::{CreateClassRequest, UpdateClassRequest},
};
use crate::storage::EntityStore;
use crate::utils::id::IdGenerator;

/// 班级行，不含成员关系
#[derive(Debug, Clone)]
struct ClassRow {
    id: String,
    name: String,
    subject: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl Keyed for ClassRow {
    fn key(&self) -> &str {
        &self.id
    }
}

impl ClassRow {
    fn into_class(self, student_ids: Vec<String>) -> ClassEntity {
        ClassEntity {
            id: self.id,
            name: self.name,
            subject: self.subject,
            student_ids,
            created_at: self.created_at,
        }
    }
}

pub struct MemoryClassStore {
    rows: Table<ClassRow>,
    memberships: Arc<MembershipTable>,
    ids: Arc<IdGenerator>,
    latency: LatencyConfig,
}

impl MemoryClassStore {
    pub(crate) fn new(
        latency: LatencyConfig,
        ids: Arc<IdGenerator>,
        memberships: Arc<MembershipTable>,
    ) -> Self {
        Self {
            rows: Table::new("Class"),
            memberships,
            ids,
            latency,
        }
    }

    fn hydrate(&self, row: ClassRow) -> Result<ClassEntity> {
        let student_ids = self.memberships.students_of(&row.id)?;
        Ok(row.into_class(student_ids))
    }

    pub(crate) fn insert_seeded(&self, class: ClassEntity) -> Result<()> {
        for student_id in &class.student_ids {
            self.memberships.enrol(&class.id, student_id)?;
        }
        self.rows.upsert(ClassRow {
            id: class.id,
            name: class.name,
            subject: class.subject,
            created_at: class.created_at,
        })
    }
}

#[async_trait]
impl EntityStore<ClassEntity> for MemoryClassStore {
    async fn get_all(&self) -> Result<Vec<ClassEntity>> {
        simulate_latency(self.latency.list_ms).await;
        self.rows
            .all()?
            .into_iter()
            .map(|row| self.hydrate(row))
            .collect()
    }

    async fn get_by_id(&self, id: &str) -> Result<ClassEntity> {
        simulate_latency(self.latency.read_ms).await;
        let row = self.rows.find(id)?;
        self.hydrate(row)
    }

    async fn create(&self, draft: CreateClassRequest) -> Result<ClassEntity> {
        simulate_latency(self.latency.write_ms).await;
        let row = self.rows.insert_new(&self.ids, |id| ClassRow {
            id,
            name: draft.name,
            subject: draft.subject,
            created_at: chrono::Utc::now(),
        })?;
        self.memberships
            .replace_students_of(&row.id, &draft.student_ids)?;

        debug!("Class {} ({}) created", row.id, row.name);
        self.hydrate(row)
    }

    async fn update(&self, id: &str, patch: UpdateClassRequest) -> Result<ClassEntity> {
        simulate_latency(self.latency.write_ms).await;
        let UpdateClassRequest {
            name,
            subject,
            student_ids,
        } = patch;

        let row = self.rows.modify(id, |row| {
            if let Some(name) = name {
                row.name = name;
            }
            if let Some(subject) = subject {
                row.subject = subject;
            }
        })?;
        if let Some(student_ids) = student_ids {
            self.memberships.replace_students_of(id, &student_ids)?;
        }

        debug!("Class {} updated", id);
        self.hydrate(row)
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        simulate_latency(self.latency.write_ms).await;
        self.rows.remove(id)?;
        debug!("Class {} deleted", id);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> MemoryClassStore {
        MemoryClassStore::new(
            LatencyConfig::default(),
            Arc::new(IdGenerator::new()),
            Arc::new(MembershipTable::new()),
        )
    }

    fn draft(name: &str, students: &[&str]) -> CreateClassRequest {
        CreateClassRequest {
            name: name.to_string(),
            subject: "Math".to_string(),
            student_ids: students.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_fresh_id_and_grows_by_one() {
        let store = store();
        let first = store.create(draft("A", &[])).await.unwrap();
        let before: Vec<String> = store
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();

        let second = store.create(draft("B", &["s1"])).await.unwrap();
        assert!(!before.contains(&second.id));
        assert_ne!(first.id, second.id);
        assert_eq!(store.get_all().await.unwrap().len(), before.len() + 1);
        assert_eq!(second.student_ids, vec!["s1".to_string()]);
    }

    #[tokio::test]
    async fn test_update_merges_and_keeps_other_fields() {
        let store = store();
        let class = store.create(draft("A", &["s1"])).await.unwrap();

        let updated = store
            .update(
                &class.id,
                UpdateClassRequest {
                    subject: Some("Physics".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "A");
        assert_eq!(updated.subject, "Physics");
        assert_eq!(updated.student_ids, vec!["s1".to_string()]);
        assert_eq!(updated.created_at, class.created_at);
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let store = store();
        let class = store.create(draft("A", &[])).await.unwrap();

        assert!(store.delete(&class.id).await.unwrap());
        assert!(store.get_by_id(&class.id).await.unwrap_err().is_not_found());
        assert!(store.delete(&class.id).await.unwrap_err().is_not_found());
        assert!(
            store
                .update(&class.id, UpdateClassRequest::default())
                .await
                .unwrap_err()
                .is_not_found()
        );
    }
}
