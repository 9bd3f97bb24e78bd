use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 通知类型
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "notification.ts")]
pub enum NotificationType {
    Announcement, // 班级公告
    Assignment,   // 新作业
    Reminder,     // 截止提醒
}

impl NotificationType {
    pub const ANNOUNCEMENT: &'static str = "announcement";
    pub const ASSIGNMENT: &'static str = "assignment";
    pub const REMINDER: &'static str = "reminder";

    pub fn all() -> &'static [NotificationType] {
        &[
            NotificationType::Announcement,
            NotificationType::Assignment,
            NotificationType::Reminder,
        ]
    }
}

impl<'de> Deserialize<'de> for NotificationType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationType::Announcement => write!(f, "{}", NotificationType::ANNOUNCEMENT),
            NotificationType::Assignment => write!(f, "{}", NotificationType::ASSIGNMENT),
            NotificationType::Reminder => write!(f, "{}", NotificationType::REMINDER),
        }
    }
}

impl std::str::FromStr for NotificationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            NotificationType::ANNOUNCEMENT => Ok(NotificationType::Announcement),
            NotificationType::ASSIGNMENT => Ok(NotificationType::Assignment),
            NotificationType::REMINDER => Ok(NotificationType::Reminder),
            _ => Err(format!(
                "Invalid notification type: '{s}'. Supported: announcement, assignment, reminder"
            )),
        }
    }
}

// 发送状态
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "notification.ts")]
pub enum NotificationStatus {
    #[default]
    Sent, // 已发送
    Pending, // 等待发送
    Error,   // 发送失败
}

impl NotificationStatus {
    pub const SENT: &'static str = "sent";
    pub const PENDING: &'static str = "pending";
    pub const ERROR: &'static str = "error";
}

impl<'de> Deserialize<'de> for NotificationStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            NotificationStatus::SENT => Ok(NotificationStatus::Sent),
            NotificationStatus::PENDING => Ok(NotificationStatus::Pending),
            NotificationStatus::ERROR => Ok(NotificationStatus::Error),
            _ => Err(serde::de::Error::custom(format!(
                "Invalid notification status: '{s}'. Supported: sent, pending, error"
            ))),
        }
    }
}

impl std::fmt::Display for NotificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationStatus::Sent => write!(f, "{}", NotificationStatus::SENT),
            NotificationStatus::Pending => write!(f, "{}", NotificationStatus::PENDING),
            NotificationStatus::Error => write!(f, "{}", NotificationStatus::ERROR),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "notification.ts")]
pub struct NotificationEntity {
    pub id: String,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub subject: String,
    pub message: String,
    // 发送时刻的收件人快照，创建后不再变化
    pub recipient_ids: Vec<String>,
    pub assignment_id: Option<String>,
    pub sent_at: chrono::DateTime<chrono::Utc>,
    pub status: NotificationStatus,
}

impl NotificationEntity {
    pub fn recipient_count(&self) -> usize {
        self.recipient_ids.len()
    }
}
