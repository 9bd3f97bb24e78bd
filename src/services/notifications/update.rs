use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::NotificationService;
use crate::models::notifications::requests::UpdateNotificationRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::error_response;

// 只能修改类型、文案、关联作业与状态，收件人快照保持不变
pub async fn update_notification(
    service: &NotificationService,
    request: &HttpRequest,
    notification_id: &str,
    update_data: UpdateNotificationRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage
        .notifications()
        .update(notification_id, update_data)
        .await
    {
        Ok(notification) => {
            info!(
                "Notification {} updated, status {}",
                notification.id, notification.status
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                notification,
                "Notification updated successfully",
            )))
        }
        Err(e) => Ok(error_response(
            &e,
            ErrorCode::NotificationNotFound,
            ErrorCode::NotificationUpdateFailed,
        )),
    }
}
