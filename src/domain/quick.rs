//! 首页快捷发送
//!
//! 与编辑器不同，这里没有会话状态：每次请求按所选班级全量计算收件人。

use super::composer::{ComposeRejection, validate_message};
use super::resolver::resolve_recipients;
use super::templates::TemplateSet;
use crate::models::classes::entities::ClassEntity;
use crate::models::notifications::{
    entities::NotificationStatus,
    requests::{CreateNotificationRequest, QuickNotifyRequest},
};

/// 把快捷发送请求展开为通知草稿
///
/// `use_template` 为真时，主题和内容都替换为快捷模板文本。
pub fn prepare_quick_notification(
    request: QuickNotifyRequest,
    classes: &[ClassEntity],
) -> Result<CreateNotificationRequest, ComposeRejection> {
    let QuickNotifyRequest {
        notification_type,
        mut subject,
        mut message,
        class_ids,
        use_template,
    } = request;

    if use_template {
        let template = TemplateSet::Quick.template(notification_type);
        subject = template.subject.to_string();
        message = template.message.to_string();
    }

    let recipient_ids = resolve_recipients(&class_ids, classes);
    validate_message(
        &subject,
        &message,
        &recipient_ids,
        ComposeRejection::NoClassesSelected,
    )?;

    Ok(CreateNotificationRequest {
        notification_type,
        subject: subject.trim().to_string(),
        message: message.trim().to_string(),
        recipient_ids,
        assignment_id: None,
        status: Some(NotificationStatus::Sent),
    })
}
