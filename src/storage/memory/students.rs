//! 学生存储操作

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::membership::MembershipTable;
use super::simulate_latency;
use super::table::{Keyed, Table};
use crate::config::LatencyConfig;
use crate::errors::Result;
use crate::models::students::{
    entities::StudentEntity,
    requests::{CreateStudentRequest, UpdateStudentRequest},
};
use crate::storage::EntityStore;
use crate::utils::id::IdGenerator;

#[derive(Debug, Clone)]
struct StudentRow {
    id: String,
    name: String,
    email: String,
}

impl Keyed for StudentRow {
    fn key(&self) -> &str {
        &self.id
    }
}

impl StudentRow {
    fn into_student(self, class_ids: Vec<String>) -> StudentEntity {
        StudentEntity {
            id: self.id,
            name: self.name,
            email: self.email,
            class_ids,
        }
    }
}

pub struct MemoryStudentStore {
    rows: Table<StudentRow>,
    memberships: Arc<MembershipTable>,
    ids: Arc<IdGenerator>,
    latency: LatencyConfig,
}

impl MemoryStudentStore {
    pub(crate) fn new(
        latency: LatencyConfig,
        ids: Arc<IdGenerator>,
        memberships: Arc<MembershipTable>,
    ) -> Self {
        Self {
            rows: Table::new("Student"),
            memberships,
            ids,
            latency,
        }
    }

    fn hydrate(&self, row: StudentRow) -> Result<StudentEntity> {
        let class_ids = self.memberships.classes_of(&row.id)?;
        Ok(row.into_student(class_ids))
    }

    pub(crate) fn insert_seeded(&self, student: StudentEntity) -> Result<()> {
        for class_id in &student.class_ids {
            self.memberships.enrol(class_id, &student.id)?;
        }
        self.rows.upsert(StudentRow {
            id: student.id,
            name: student.name,
            email: student.email,
        })
    }
}

#[async_trait]
impl EntityStore<StudentEntity> for MemoryStudentStore {
    async fn get_all(&self) -> Result<Vec<StudentEntity>> {
        simulate_latency(self.latency.list_ms).await;
        self.rows
            .all()?
            .into_iter()
            .map(|row| self.hydrate(row))
            .collect()
    }

    async fn get_by_id(&self, id: &str) -> Result<StudentEntity> {
        simulate_latency(self.latency.read_ms).await;
        let row = self.rows.find(id)?;
        self.hydrate(row)
    }

    async fn create(&self, draft: CreateStudentRequest) -> Result<StudentEntity> {
        simulate_latency(self.latency.write_ms).await;
        let row = self.rows.insert_new(&self.ids, |id| StudentRow {
            id,
            name: draft.name,
            email: draft.email,
        })?;
        // 入班只写一次关系表，班级一侧自动可见
        self.memberships.replace_classes_of(&row.id, &draft.class_ids)?;

        debug!("Student {} created in {} classes", row.id, draft.class_ids.len());
        self.hydrate(row)
    }

    async fn update(&self, id: &str, patch: UpdateStudentRequest) -> Result<StudentEntity> {
        simulate_latency(self.latency.write_ms).await;
        let UpdateStudentRequest {
            name,
            email,
            class_ids,
        } = patch;

        let row = self.rows.modify(id, |row| {
            if let Some(name) = name {
                row.name = name;
            }
            if let Some(email) = email {
                row.email = email;
            }
        })?;
        if let Some(class_ids) = class_ids {
            self.memberships.replace_classes_of(id, &class_ids)?;
        }

        debug!("Student {} updated", id);
        self.hydrate(row)
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        simulate_latency(self.latency.write_ms).await;
        self.rows.remove(id)?;
        debug!("Student {} deleted", id);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> MemoryStudentStore {
        MemoryStudentStore::new(
            LatencyConfig::default(),
            Arc::new(IdGenerator::new()),
            Arc::new(MembershipTable::new()),
        )
    }

    fn draft(name: &str, classes: &[&str]) -> CreateStudentRequest {
        CreateStudentRequest {
            name: name.to_string(),
            email: format!("{}@school.edu", name.to_lowercase()),
            class_ids: classes.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_fresh_id_and_grows_by_one() {
        let store = store();
        let first = store.create(draft("Ana", &[])).await.unwrap();
        let before = store.get_all().await.unwrap();

        let second = store.create(draft("Ben", &["c1"])).await.unwrap();
        assert_ne!(first.id, second.id);
        assert!(before.iter().all(|s| s.id != second.id));

        let after = store.get_all().await.unwrap();
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(after.last().unwrap().id, second.id);
        assert_eq!(second.class_ids, vec!["c1".to_string()]);
    }

    #[tokio::test]
    async fn test_update_merges_and_keeps_other_fields() {
        let store = store();
        let student = store.create(draft("Ana", &["c1"])).await.unwrap();

        let updated = store
            .update(
                &student.id,
                UpdateStudentRequest {
                    email: Some("ana.new@school.edu".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Ana");
        assert_eq!(updated.email, "ana.new@school.edu");
        assert_eq!(updated.class_ids, vec!["c1".to_string()]);
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let store = store();
        let student = store.create(draft("Ana", &[])).await.unwrap();

        assert!(store.delete(&student.id).await.unwrap());
        assert!(store.get_by_id(&student.id).await.unwrap_err().is_not_found());
        assert!(store.delete(&student.id).await.unwrap_err().is_not_found());
        assert!(
            store
                .update(&student.id, UpdateStudentRequest::default())
                .await
                .unwrap_err()
                .is_not_found()
        );
    }
}
