use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::NotificationService;
use crate::domain::composer::{ComposeRejection, validate_message};
use crate::models::notifications::requests::CreateNotificationRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{error_response, validation_failed};

pub async fn create_notification(
    service: &NotificationService,
    request: &HttpRequest,
    mut notification_data: CreateNotificationRequest,
) -> ActixResult<HttpResponse> {
    if let Err(rejection) = validate_message(
        &notification_data.subject,
        &notification_data.message,
        &notification_data.recipient_ids,
        ComposeRejection::NoRecipients,
    ) {
        return Ok(validation_failed(
            ErrorCode::ValidationFailed,
            rejection.message(),
        ));
    }
    notification_data.subject = notification_data.subject.trim().to_string();
    notification_data.message = notification_data.message.trim().to_string();

    let storage = service.get_storage(request)?;

    match storage.notifications().create(notification_data).await {
        Ok(notification) => {
            info!(
                "Notification {} sent to {} students",
                notification.id,
                notification.recipient_count()
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                notification,
                "Notification sent successfully",
            )))
        }
        Err(e) => Ok(error_response(
            &e,
            ErrorCode::NotificationNotFound,
            ErrorCode::NotificationSendFailed,
        )),
    }
}
