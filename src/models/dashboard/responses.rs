use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 首页统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "dashboard.ts")]
pub struct DashboardStats {
    pub total_classes: usize,
    pub total_students: usize,
    // 截止日期在当前时间之后的作业
    pub pending_assignments: usize,
    // 最近 7 天发送的通知
    pub recent_notifications: usize,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "dashboard.ts")]
pub enum ActivityKind {
    Notification,
    Assignment,
}

// 最近动态条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "dashboard.ts")]
pub struct ActivityItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub title: String,
    pub description: String,
    pub time: chrono::DateTime<chrono::Utc>,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "dashboard.ts")]
pub struct DashboardResponse {
    pub stats: DashboardStats,
    pub recent_activity: Vec<ActivityItem>,
}
