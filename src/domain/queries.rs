//! 列表查询
//!
//! 存储层只返回全量数据，搜索、过滤和排序都在这里完成。

use chrono::{DateTime, Utc};

use crate::models::{
    assignments::{
        entities::{AssignmentEntity, AssignmentFilter},
        responses::AssignmentCounts,
    },
    classes::entities::ClassEntity,
    notifications::entities::NotificationEntity,
    students::entities::StudentEntity,
};

pub const UNKNOWN_CLASS: &str = "Unknown Class";

/// 按姓名或邮箱做不区分大小写的子串匹配，空关键字返回全部
pub fn search_students(students: Vec<StudentEntity>, keyword: Option<&str>) -> Vec<StudentEntity> {
    let keyword = match keyword.map(str::trim) {
        Some(k) if !k.is_empty() => k.to_lowercase(),
        _ => return students,
    };

    students
        .into_iter()
        .filter(|s| {
            s.name.to_lowercase().contains(&keyword) || s.email.to_lowercase().contains(&keyword)
        })
        .collect()
}

fn matches_filter(assignment: &AssignmentEntity, filter: AssignmentFilter, now: DateTime<Utc>) -> bool {
    match filter {
        AssignmentFilter::All => true,
        AssignmentFilter::Upcoming => assignment.due_instant() > now,
        AssignmentFilter::Overdue => assignment.due_instant() < now,
    }
}

pub fn filter_assignments(
    assignments: Vec<AssignmentEntity>,
    filter: AssignmentFilter,
    now: DateTime<Utc>,
) -> Vec<AssignmentEntity> {
    assignments
        .into_iter()
        .filter(|a| matches_filter(a, filter, now))
        .collect()
}

pub fn assignment_counts(assignments: &[AssignmentEntity], now: DateTime<Utc>) -> AssignmentCounts {
    let count = |filter| {
        assignments
            .iter()
            .filter(|a| matches_filter(a, filter, now))
            .count()
    };
    AssignmentCounts {
        all: assignments.len(),
        upcoming: count(AssignmentFilter::Upcoming),
        overdue: count(AssignmentFilter::Overdue),
    }
}

/// 作业所属班级的名称，班级已不存在时返回 "Unknown Class"
pub fn class_name_for<'a>(class_id: &str, classes: &'a [ClassEntity]) -> &'a str {
    classes
        .iter()
        .find(|c| c.id == class_id)
        .map(|c| c.name.as_str())
        .unwrap_or(UNKNOWN_CLASS)
}

pub fn roster_size(class_id: &str, classes: &[ClassEntity]) -> usize {
    classes
        .iter()
        .find(|c| c.id == class_id)
        .map(ClassEntity::student_count)
        .unwrap_or(0)
}

/// 通知历史，最新的在前
pub fn notification_history(mut notifications: Vec<NotificationEntity>) -> Vec<NotificationEntity> {
    notifications.sort_by(|a, b| b.sent_at.cmp(&a.sent_at));
    notifications
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, TimeZone};

    use super::*;
    use crate::models::notifications::entities::{NotificationStatus, NotificationType};

    fn student(id: &str, name: &str, email: &str) -> StudentEntity {
        StudentEntity {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            class_ids: Vec::new(),
        }
    }

    fn assignment(id: &str, due: NaiveDate) -> AssignmentEntity {
        AssignmentEntity {
            id: id.into(),
            class_id: "1".into(),
            title: format!("Assignment {id}"),
            description: String::new(),
            due_date: due,
            attachments: Vec::new(),
            created_at: Utc::now(),
        }
    }

    fn notification(id: &str, sent_at: DateTime<Utc>) -> NotificationEntity {
        NotificationEntity {
            id: id.into(),
            notification_type: NotificationType::Announcement,
            subject: "s".into(),
            message: "m".into(),
            recipient_ids: vec!["s1".into()],
            assignment_id: None,
            sent_at,
            status: NotificationStatus::Sent,
        }
    }

    #[test]
    fn test_search_matches_name_or_email_ignoring_case() {
        let students = vec![
            student("1", "Emma Johnson", "emma@school.edu"),
            student("2", "Liam Smith", "liam@school.edu"),
            student("3", "Olivia Brown", "obrown@EMMAUS.org"),
        ];

        let hits = search_students(students.clone(), Some("EMMA"));
        let ids: Vec<_> = hits.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);

        assert_eq!(search_students(students.clone(), Some("  ")).len(), 3);
        assert_eq!(search_students(students, None).len(), 3);
    }

    #[test]
    fn test_filter_and_counts_around_now() {
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();
        let assignments = vec![
            assignment("past", NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()),
            assignment("future", NaiveDate::from_ymd_opt(2025, 3, 20).unwrap()),
            assignment("today", NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()),
        ];

        let upcoming = filter_assignments(assignments.clone(), AssignmentFilter::Upcoming, now);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].id, "future");

        // 当天 00:00 已经过去
        let overdue = filter_assignments(assignments.clone(), AssignmentFilter::Overdue, now);
        assert_eq!(overdue.len(), 2);

        let counts = assignment_counts(&assignments, now);
        assert_eq!(
            counts,
            AssignmentCounts {
                all: 3,
                upcoming: 1,
                overdue: 2
            }
        );
    }

    #[test]
    fn test_class_lookups() {
        let classes = vec![ClassEntity {
            id: "1".into(),
            name: "Algebra".into(),
            subject: "Math".into(),
            student_ids: vec!["s1".into(), "s2".into()],
            created_at: Utc::now(),
        }];

        assert_eq!(class_name_for("1", &classes), "Algebra");
        assert_eq!(class_name_for("gone", &classes), UNKNOWN_CLASS);
        assert_eq!(roster_size("1", &classes), 2);
        assert_eq!(roster_size("gone", &classes), 0);
    }

    #[test]
    fn test_history_is_newest_first() {
        let now = Utc::now();
        let history = notification_history(vec![
            notification("old", now - Duration::days(3)),
            notification("new", now),
            notification("mid", now - Duration::hours(1)),
        ]);
        let ids: Vec<_> = history.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["new", "mid", "old"]);
    }
}
