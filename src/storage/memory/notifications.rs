//! 通知存储操作

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::simulate_latency;
use super::table::{Keyed, Table};
use crate::config::LatencyConfig;
use crate::errors::Result;
use crate::models::notifications::{
    entities::NotificationEntity,
    requests::{CreateNotificationRequest, UpdateNotificationRequest},
};
use crate::storage::EntityStore;
use crate::utils::id::IdGenerator;

impl Keyed for NotificationEntity {
    fn key(&self) -> &str {
        &self.id
    }
}

pub struct MemoryNotificationStore {
    rows: Table<NotificationEntity>,
    ids: Arc<IdGenerator>,
    latency: LatencyConfig,
}

impl MemoryNotificationStore {
    pub(crate) fn new(latency: LatencyConfig, ids: Arc<IdGenerator>) -> Self {
        Self {
            rows: Table::new("Notification"),
            ids,
            latency,
        }
    }

    pub(crate) fn insert_seeded(&self, notification: NotificationEntity) -> Result<()> {
        self.rows.upsert(notification)
    }
}

#[async_trait]
impl EntityStore<NotificationEntity> for MemoryNotificationStore {
    async fn get_all(&self) -> Result<Vec<NotificationEntity>> {
        simulate_latency(self.latency.list_ms).await;
        self.rows.all()
    }

    async fn get_by_id(&self, id: &str) -> Result<NotificationEntity> {
        simulate_latency(self.latency.read_ms).await;
        self.rows.find(id)
    }

    async fn create(&self, draft: CreateNotificationRequest) -> Result<NotificationEntity> {
        // 发送比普通写入更慢
        simulate_latency(self.latency.send_ms).await;
        let notification = self.rows.insert_new(&self.ids, |id| NotificationEntity {
            id,
            notification_type: draft.notification_type,
            subject: draft.subject,
            message: draft.message,
            recipient_ids: draft.recipient_ids,
            assignment_id: draft.assignment_id,
            sent_at: chrono::Utc::now(),
            status: draft.status.unwrap_or_default(),
        })?;

        debug!(
            "Notification {} ({}) stored for {} recipients",
            notification.id,
            notification.notification_type,
            notification.recipient_count()
        );
        Ok(notification)
    }

    async fn update(
        &self,
        id: &str,
        patch: UpdateNotificationRequest,
    ) -> Result<NotificationEntity> {
        simulate_latency(self.latency.write_ms).await;
        let notification = self.rows.modify(id, |row| {
            if let Some(notification_type) = patch.notification_type {
                row.notification_type = notification_type;
            }
            if let Some(subject) = patch.subject {
                row.subject = subject;
            }
            if let Some(message) = patch.message {
                row.message = message;
            }
            if let Some(assignment_id) = patch.assignment_id {
                row.assignment_id = assignment_id;
            }
            if let Some(status) = patch.status {
                row.status = status;
            }
        })?;

        debug!("Notification {} updated", id);
        Ok(notification)
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        simulate_latency(self.latency.write_ms).await;
        self.rows.remove(id)?;
        debug!("Notification {} deleted", id);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::notifications::entities::{NotificationStatus, NotificationType};

    fn store() -> MemoryNotificationStore {
        MemoryNotificationStore::new(LatencyConfig::default(), Arc::new(IdGenerator::new()))
    }

    fn reminder(recipients: &[&str]) -> CreateNotificationRequest {
        CreateNotificationRequest {
            notification_type: NotificationType::Reminder,
            subject: "x".into(),
            message: "y".into(),
            recipient_ids: recipients.iter().map(|s| s.to_string()).collect(),
            assignment_id: None,
            status: None,
        }
    }

    #[tokio::test]
    async fn test_create_stamps_sent_at_and_defaults_status() {
        let store = store();
        let before = chrono::Utc::now();
        let notification = store.create(reminder(&["s1", "s3"])).await.unwrap();

        assert_eq!(notification.status, NotificationStatus::Sent);
        assert!(notification.sent_at >= before);
        assert_eq!(
            notification.recipient_ids,
            vec!["s1".to_string(), "s3".to_string()]
        );
    }

    #[tokio::test]
    async fn test_create_assigns_fresh_id_and_grows_by_one() {
        let store = store();
        let first = store.create(reminder(&["s1"])).await.unwrap();
        let before = store.get_all().await.unwrap();

        let second = store.create(reminder(&["s2"])).await.unwrap();
        assert_ne!(first.id, second.id);
        assert!(before.iter().all(|n| n.id != second.id));
        assert_eq!(store.get_all().await.unwrap().len(), before.len() + 1);
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let store = store();
        let notification = store.create(reminder(&["s1"])).await.unwrap();

        assert!(store.delete(&notification.id).await.unwrap());
        assert!(
            store
                .get_by_id(&notification.id)
                .await
                .unwrap_err()
                .is_not_found()
        );
        assert!(store.delete(&notification.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_explicit_status_is_kept() {
        let store = store();
        let mut draft = reminder(&["s1"]);
        draft.status = Some(NotificationStatus::Pending);
        let notification = store.create(draft).await.unwrap();
        assert_eq!(notification.status, NotificationStatus::Pending);
    }

    #[tokio::test]
    async fn test_patch_never_touches_recipients() {
        let store = store();
        let notification = store.create(reminder(&["s1", "s3"])).await.unwrap();

        let updated = store
            .update(
                &notification.id,
                UpdateNotificationRequest {
                    subject: Some("changed".into()),
                    assignment_id: Some(Some("a1".into())),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.subject, "changed");
        assert_eq!(updated.assignment_id.as_deref(), Some("a1"));
        assert_eq!(updated.recipient_ids, notification.recipient_ids);
        assert_eq!(updated.sent_at, notification.sent_at);

        let cleared = store
            .update(
                &notification.id,
                UpdateNotificationRequest {
                    assignment_id: Some(None),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(cleared.assignment_id, None);
    }

    #[test]
    fn test_patch_rejects_recipient_field() {
        let result = serde_json::from_str::<UpdateNotificationRequest>(
            r#"{"subject":"x","recipient_ids":["s9"]}"#,
        );
        assert!(result.is_err());
    }
}
