//! 首页统计与最近动态

use chrono::{DateTime, Duration, Utc};

use crate::models::{
    assignments::entities::AssignmentEntity,
    classes::entities::ClassEntity,
    dashboard::responses::{ActivityItem, ActivityKind, DashboardStats},
    notifications::entities::NotificationEntity,
    students::entities::StudentEntity,
};

const RECENT_NOTIFICATION_DAYS: i64 = 7;
const RECENT_NOTIFICATIONS: usize = 3;
const RECENT_ASSIGNMENTS: usize = 2;
const RECENT_ACTIVITY_LIMIT: usize = 5;

pub fn stats(
    classes: &[ClassEntity],
    students: &[StudentEntity],
    assignments: &[AssignmentEntity],
    notifications: &[NotificationEntity],
    now: DateTime<Utc>,
) -> DashboardStats {
    let since = now - Duration::days(RECENT_NOTIFICATION_DAYS);
    DashboardStats {
        total_classes: classes.len(),
        total_students: students.len(),
        pending_assignments: assignments.iter().filter(|a| a.due_instant() > now).count(),
        recent_notifications: notifications.iter().filter(|n| n.sent_at >= since).count(),
    }
}

/// 最近动态：最新的 3 条通知与前 2 个作业，合并后按时间倒序取前 5 条
pub fn recent_activity(
    assignments: &[AssignmentEntity],
    notifications: &[NotificationEntity],
) -> Vec<ActivityItem> {
    let mut newest: Vec<&NotificationEntity> = notifications.iter().collect();
    newest.sort_by(|a, b| b.sent_at.cmp(&a.sent_at));

    let notification_items = newest.into_iter().take(RECENT_NOTIFICATIONS).map(|n| ActivityItem {
        id: n.id.clone(),
        kind: ActivityKind::Notification,
        title: n.subject.clone(),
        description: format!("Sent to {} students", n.recipient_count()),
        time: n.sent_at,
        status: n.status.to_string(),
    });

    let assignment_items = assignments.iter().take(RECENT_ASSIGNMENTS).map(|a| ActivityItem {
        id: a.id.clone(),
        kind: ActivityKind::Assignment,
        title: a.title.clone(),
        description: format!("Due {}", a.due_date.format("%Y-%m-%d")),
        time: a.created_at,
        status: "active".to_string(),
    });

    let mut items: Vec<ActivityItem> = notification_items.chain(assignment_items).collect();
    items.sort_by(|a, b| b.time.cmp(&a.time));
    items.truncate(RECENT_ACTIVITY_LIMIT);
    items
}
