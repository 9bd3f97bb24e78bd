//! 通知编辑器
//!
//! 状态流转：`Idle` → `Editing` → `Submitting` → 成功回到 `Idle`，
//! 失败回到 `Editing` 并保留错误信息。

use tracing::{info, warn};

use super::resolver::RecipientResolver;
use super::templates::TemplateSet;
use crate::errors::{ClassDeskError, Result};
use crate::models::classes::entities::ClassEntity;
use crate::models::composers::{entities::ComposerState, responses::ComposerView};
use crate::models::notifications::{
    entities::{NotificationEntity, NotificationStatus, NotificationType},
    requests::CreateNotificationRequest,
};
use crate::storage::EntityStore;

/// 提交前的校验失败原因，按检查顺序排列
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeRejection {
    EmptySubject,
    EmptyMessage,
    NoRecipients,
    NoClassesSelected,
}

impl ComposeRejection {
    pub fn message(&self) -> &'static str {
        match self {
            ComposeRejection::EmptySubject => "Please enter a subject",
            ComposeRejection::EmptyMessage => "Please enter a message",
            ComposeRejection::NoRecipients => "Please select at least one recipient",
            ComposeRejection::NoClassesSelected => "Please select at least one class",
        }
    }
}

impl From<ComposeRejection> for ClassDeskError {
    fn from(rejection: ComposeRejection) -> Self {
        ClassDeskError::validation(rejection.message())
    }
}

/// 校验主题、内容和收件人，第一个失败项胜出
pub fn validate_message(
    subject: &str,
    message: &str,
    recipients: &[String],
    empty_recipients: ComposeRejection,
) -> std::result::Result<(), ComposeRejection> {
    if subject.trim().is_empty() {
        return Err(ComposeRejection::EmptySubject);
    }
    if message.trim().is_empty() {
        return Err(ComposeRejection::EmptyMessage);
    }
    if recipients.is_empty() {
        return Err(empty_recipients);
    }
    Ok(())
}

const SEND_FAILED: &str = "Failed to send notification";

#[derive(Debug, Clone, PartialEq, Eq)]
struct ComposerForm {
    notification_type: NotificationType,
    template: Option<NotificationType>,
    subject: String,
    message: String,
    assignment_id: Option<String>,
}

impl Default for ComposerForm {
    fn default() -> Self {
        Self {
            notification_type: NotificationType::Announcement,
            template: None,
            subject: String::new(),
            message: String::new(),
            assignment_id: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NotificationComposer {
    state: ComposerState,
    form: ComposerForm,
    resolver: RecipientResolver,
    last_error: Option<String>,
}

impl NotificationComposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ComposerState {
        self.state
    }

    pub fn recipients(&self) -> &[String] {
        self.resolver.recipients()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn reset(&mut self) {
        self.form = ComposerForm::default();
        self.resolver.clear();
        self.last_error = None;
    }

    fn ensure_editing(&self) -> Result<()> {
        match self.state {
            ComposerState::Editing => Ok(()),
            ComposerState::Idle => Err(ClassDeskError::conflict("Composer is not open")),
            ComposerState::Submitting => Err(ClassDeskError::conflict(
                "A submission is already in progress",
            )),
        }
    }

    /// 打开编辑器，表单重置为空白
    pub fn open(&mut self) -> Result<()> {
        if self.state == ComposerState::Submitting {
            return Err(ClassDeskError::conflict(
                "A submission is already in progress",
            ));
        }
        self.reset();
        self.state = ComposerState::Editing;
        Ok(())
    }

    /// 关闭编辑器并丢弃未提交的内容
    pub fn close(&mut self) -> Result<()> {
        if self.state == ComposerState::Submitting {
            return Err(ClassDeskError::conflict(
                "A submission is already in progress",
            ));
        }
        self.reset();
        self.state = ComposerState::Idle;
        Ok(())
    }

    /// 套用模板：覆盖类型、主题和内容，不影响已选班级
    pub fn apply_template(&mut self, notification_type: NotificationType) -> Result<()> {
        self.ensure_editing()?;
        let template = TemplateSet::Composer.template(notification_type);
        self.form.notification_type = template.notification_type;
        self.form.template = Some(notification_type);
        self.form.subject = template.subject.to_string();
        self.form.message = template.message.to_string();
        Ok(())
    }

    pub fn set_subject(&mut self, subject: impl Into<String>) -> Result<()> {
        self.ensure_editing()?;
        self.form.subject = subject.into();
        Ok(())
    }

    pub fn set_message(&mut self, message: impl Into<String>) -> Result<()> {
        self.ensure_editing()?;
        self.form.message = message.into();
        Ok(())
    }

    pub fn set_assignment(&mut self, assignment_id: Option<String>) -> Result<()> {
        self.ensure_editing()?;
        self.form.assignment_id = assignment_id.filter(|id| !id.is_empty());
        Ok(())
    }

    /// 切换班级选择；班级不存在时不做修改
    pub fn toggle_class(&mut self, class_id: &str, classes: &[ClassEntity]) -> Result<Option<bool>> {
        self.ensure_editing()?;
        Ok(self.resolver.toggle_class(class_id, classes))
    }

    pub fn validate(&self) -> std::result::Result<(), ComposeRejection> {
        validate_message(
            &self.form.subject,
            &self.form.message,
            self.resolver.recipients(),
            ComposeRejection::NoRecipients,
        )
    }

    /// 校验并进入 `Submitting`，返回要交给存储层的请求
    ///
    /// 校验失败时保持 `Editing`，错误信息写入 `last_error`。
    pub fn begin_submit(&mut self) -> Result<CreateNotificationRequest> {
        self.ensure_editing()?;
        if let Err(rejection) = self.validate() {
            self.last_error = Some(rejection.message().to_string());
            return Err(rejection.into());
        }

        self.state = ComposerState::Submitting;
        self.last_error = None;
        Ok(CreateNotificationRequest {
            notification_type: self.form.notification_type,
            subject: self.form.subject.trim().to_string(),
            message: self.form.message.trim().to_string(),
            recipient_ids: self.resolver.recipients().to_vec(),
            assignment_id: self.form.assignment_id.clone(),
            status: Some(NotificationStatus::Sent),
        })
    }

    /// 根据存储层结果结束提交
    pub fn finish_submit(
        &mut self,
        outcome: Result<NotificationEntity>,
    ) -> Result<NotificationEntity> {
        if self.state != ComposerState::Submitting {
            return Err(ClassDeskError::conflict("No submission in progress"));
        }

        match outcome {
            Ok(notification) => {
                info!(
                    "Notification {} sent to {} students",
                    notification.id,
                    notification.recipient_count()
                );
                self.reset();
                self.state = ComposerState::Idle;
                Ok(notification)
            }
            Err(e) => {
                warn!("Notification submission failed: {}", e);
                self.last_error = Some(SEND_FAILED.to_string());
                self.state = ComposerState::Editing;
                Err(e)
            }
        }
    }

    /// 校验并提交到通知存储
    pub async fn submit(
        &mut self,
        store: &dyn EntityStore<NotificationEntity>,
    ) -> Result<NotificationEntity> {
        let draft = self.begin_submit()?;
        let outcome = store.create(draft).await;
        self.finish_submit(outcome)
    }

    pub fn view(&self, id: &str) -> ComposerView {
        ComposerView {
            id: id.to_string(),
            state: self.state,
            notification_type: self.form.notification_type,
            template: self.form.template,
            subject: self.form.subject.clone(),
            message: self.form.message.clone(),
            assignment_id: self.form.assignment_id.clone(),
            selected_class_ids: self.resolver.selected_class_ids().to_vec(),
            recipient_ids: self.resolver.recipients().to_vec(),
            last_error: self.last_error.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::models::notifications::requests::UpdateNotificationRequest;

    /// 记录调用次数的假通知存储，可配置为失败
    #[derive(Default)]
    struct FakeNotificationStore {
        creates: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl EntityStore<NotificationEntity> for FakeNotificationStore {
        async fn get_all(&self) -> Result<Vec<NotificationEntity>> {
            Ok(Vec::new())
        }

        async fn get_by_id(&self, id: &str) -> Result<NotificationEntity> {
            Err(ClassDeskError::entity_not_found("Notification", id))
        }

        async fn create(&self, draft: CreateNotificationRequest) -> Result<NotificationEntity> {
            self.creates.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(ClassDeskError::storage_state("backend unavailable"));
            }
            Ok(NotificationEntity {
                id: "n1".into(),
                notification_type: draft.notification_type,
                subject: draft.subject,
                message: draft.message,
                recipient_ids: draft.recipient_ids,
                assignment_id: draft.assignment_id,
                sent_at: chrono::Utc::now(),
                status: draft.status.unwrap_or_default(),
            })
        }

        async fn update(
            &self,
            id: &str,
            _patch: UpdateNotificationRequest,
        ) -> Result<NotificationEntity> {
            Err(ClassDeskError::entity_not_found("Notification", id))
        }

        async fn delete(&self, id: &str) -> Result<bool> {
            Err(ClassDeskError::entity_not_found("Notification", id))
        }
    }

    fn class(id: &str, students: &[&str]) -> ClassEntity {
        ClassEntity {
            id: id.to_string(),
            name: format!("Class {id}"),
            subject: "Math".to_string(),
            student_ids: students.iter().map(|s| s.to_string()).collect(),
            created_at: chrono::Utc::now(),
        }
    }

    fn open_composer() -> NotificationComposer {
        let mut composer = NotificationComposer::new();
        composer.open().unwrap();
        composer
    }

    #[test]
    fn test_template_overwrites_text_but_keeps_selection() {
        let classes = vec![class("A", &["s1"])];
        let mut composer = open_composer();
        composer.toggle_class("A", &classes).unwrap();
        composer.set_subject("custom").unwrap();

        composer.apply_template(NotificationType::Reminder).unwrap();
        let view = composer.view("c");
        assert_eq!(view.notification_type, NotificationType::Reminder);
        assert_eq!(view.template, Some(NotificationType::Reminder));
        assert_eq!(view.subject, "Assignment Reminder");
        assert_eq!(view.selected_class_ids, vec!["A".to_string()]);
        assert_eq!(view.recipient_ids, vec!["s1".to_string()]);
    }

    #[tokio::test]
    async fn test_validation_order_and_no_store_call() {
        let store = FakeNotificationStore::default();
        let classes = vec![class("A", &["s1"])];
        let mut composer = open_composer();

        composer.set_subject("   ").unwrap();
        composer.set_message("").unwrap();
        let err = composer.submit(&store).await.unwrap_err();
        assert_eq!(err.message(), "Please enter a subject");

        composer.set_subject("Hello").unwrap();
        let err = composer.submit(&store).await.unwrap_err();
        assert_eq!(err.message(), "Please enter a message");

        composer.set_message("World").unwrap();
        let err = composer.submit(&store).await.unwrap_err();
        assert_eq!(err.message(), "Please select at least one recipient");
        assert_eq!(composer.last_error(), Some("Please select at least one recipient"));

        assert_eq!(store.creates.load(Ordering::SeqCst), 0);
        assert_eq!(composer.state(), ComposerState::Editing);

        composer.toggle_class("A", &classes).unwrap();
        assert!(composer.validate().is_ok());
    }

    #[tokio::test]
    async fn test_successful_submit_snapshots_and_resets() {
        let store = FakeNotificationStore::default();
        let classes = vec![class("A", &["s1", "s2"]), class("B", &["s2", "s3"])];
        let mut composer = open_composer();
        composer.apply_template(NotificationType::Announcement).unwrap();
        composer.set_subject("  Field trip  ").unwrap();
        composer.toggle_class("A", &classes).unwrap();
        composer.toggle_class("B", &classes).unwrap();
        composer.toggle_class("A", &classes).unwrap();

        let notification = composer.submit(&store).await.unwrap();
        assert_eq!(notification.subject, "Field trip");
        assert_eq!(notification.status, NotificationStatus::Sent);
        assert_eq!(
            notification.recipient_ids,
            vec!["s2".to_string(), "s3".to_string()]
        );

        assert_eq!(composer.state(), ComposerState::Idle);
        let view = composer.view("c");
        assert!(view.subject.is_empty());
        assert!(view.selected_class_ids.is_empty());
        assert!(view.recipient_ids.is_empty());
        assert_eq!(view.template, None);
    }

    #[tokio::test]
    async fn test_failed_submit_returns_to_editing() {
        let store = FakeNotificationStore {
            fail: true,
            ..Default::default()
        };
        let classes = vec![class("A", &["s1"])];
        let mut composer = open_composer();
        composer.apply_template(NotificationType::Assignment).unwrap();
        composer.toggle_class("A", &classes).unwrap();

        assert!(composer.submit(&store).await.is_err());
        assert_eq!(composer.state(), ComposerState::Editing);
        assert_eq!(composer.last_error(), Some("Failed to send notification"));
        // 表单内容保留，用户可以直接重试
        assert_eq!(composer.recipients(), ["s1".to_string()].as_slice());
        assert_eq!(composer.view("c").subject, "New Assignment Posted");
    }

    #[test]
    fn test_single_submission_in_flight() {
        let classes = vec![class("A", &["s1"])];
        let mut composer = open_composer();
        composer.apply_template(NotificationType::Reminder).unwrap();
        composer.toggle_class("A", &classes).unwrap();

        composer.begin_submit().unwrap();
        assert_eq!(composer.state(), ComposerState::Submitting);

        let err = composer.begin_submit().unwrap_err();
        assert_eq!(err.code(), "E003");
        assert!(composer.close().is_err());
        assert!(composer.set_subject("x").is_err());
    }

    #[test]
    fn test_closed_composer_rejects_edits() {
        let mut composer = NotificationComposer::new();
        assert_eq!(composer.state(), ComposerState::Idle);
        assert!(composer.apply_template(NotificationType::Reminder).is_err());
        assert!(composer.toggle_class("A", &[]).is_err());

        composer.open().unwrap();
        composer.set_subject("draft").unwrap();
        composer.close().unwrap();
        composer.open().unwrap();
        assert!(composer.view("c").subject.is_empty());
    }
}
