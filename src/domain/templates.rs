//! 通知模板
//!
//! 编辑器与首页快捷发送各有一套固定文案。

use crate::models::notifications::entities::NotificationType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub notification_type: NotificationType,
    pub subject: &'static str,
    pub message: &'static str,
}

/// 模板集合
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateSet {
    Composer,
    Quick,
}

impl TemplateSet {
    pub fn template(self, notification_type: NotificationType) -> Template {
        let (subject, message) = match (self, notification_type) {
            (_, NotificationType::Assignment) => (
                "New Assignment Posted",
                "A new assignment has been posted for your class. Please check the details and due date.",
            ),
            (TemplateSet::Composer, NotificationType::Announcement) => (
                "Class Announcement",
                "Important information for your class.",
            ),
            (TemplateSet::Composer, NotificationType::Reminder) => (
                "Assignment Reminder",
                "This is a reminder about your upcoming assignment due date.",
            ),
            (TemplateSet::Quick, NotificationType::Announcement) => (
                "Class Update",
                "Important update regarding our class. Please read carefully.",
            ),
            (TemplateSet::Quick, NotificationType::Reminder) => (
                "Assignment Due Tomorrow",
                "This is a friendly reminder that your assignment is due tomorrow. Please submit on time.",
            ),
        };

        Template {
            notification_type,
            subject,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_type_has_text_in_both_sets() {
        for set in [TemplateSet::Composer, TemplateSet::Quick] {
            for kind in NotificationType::all() {
                let template = set.template(*kind);
                assert_eq!(template.notification_type, *kind);
                assert!(!template.subject.is_empty());
                assert!(!template.message.is_empty());
            }
        }
    }

    #[test]
    fn test_sets_differ_for_reminders() {
        let composer = TemplateSet::Composer.template(NotificationType::Reminder);
        let quick = TemplateSet::Quick.template(NotificationType::Reminder);
        assert_eq!(composer.subject, "Assignment Reminder");
        assert_eq!(quick.subject, "Assignment Due Tomorrow");
    }
}
