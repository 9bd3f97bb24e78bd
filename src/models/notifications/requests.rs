use serde::Deserialize;
use ts_rs::TS;

use super::entities::{NotificationStatus, NotificationType};
use crate::models::common::serde_helpers::deserialize_some;

/// 创建通知请求
///
/// `sent_at` 总是由存储层盖章，`status` 缺省为 `sent`。
#[derive(Debug, Clone, PartialEq, Deserialize, TS)]
#[ts(export, export_to = "notification.ts")]
pub struct CreateNotificationRequest {
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub subject: String,
    pub message: String,
    pub recipient_ids: Vec<String>,
    #[serde(default)]
    pub assignment_id: Option<String>,
    #[serde(default)]
    pub status: Option<NotificationStatus>,
}

/// 更新通知请求
///
/// 收件人与发送时间不在可修改字段内，携带它们的补丁会被拒绝。
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export, export_to = "notification.ts")]
pub struct UpdateNotificationRequest {
    #[serde(rename = "type")]
    pub notification_type: Option<NotificationType>,
    pub subject: Option<String>,
    pub message: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub assignment_id: Option<Option<String>>,
    pub status: Option<NotificationStatus>,
}

/// 快速通知请求（首页快捷发送）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "notification.ts")]
pub struct QuickNotifyRequest {
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub class_ids: Vec<String>,
    // 为真时主题和内容被快捷模板覆盖
    #[serde(default)]
    pub use_template: bool,
}
