use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::ComposerState;
use crate::models::notifications::entities::{NotificationEntity, NotificationType};

// 编辑器当前快照
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "composer.ts")]
pub struct ComposerView {
    pub id: String,
    pub state: ComposerState,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub template: Option<NotificationType>,
    pub subject: String,
    pub message: String,
    pub assignment_id: Option<String>,
    pub selected_class_ids: Vec<String>,
    pub recipient_ids: Vec<String>,
    pub last_error: Option<String>,
}

// 提交结果：发送出的通知以及重置后的编辑器
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "composer.ts")]
pub struct ComposerSubmitResponse {
    pub notification: NotificationEntity,
    pub composer: ComposerView,
}
