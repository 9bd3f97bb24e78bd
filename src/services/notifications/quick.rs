use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::NotificationService;
use crate::domain::quick::prepare_quick_notification;
use crate::models::notifications::requests::QuickNotifyRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{error_response, validation_failed};

pub async fn quick_notify(
    service: &NotificationService,
    request: &HttpRequest,
    quick_data: QuickNotifyRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let classes = match storage.classes().get_all().await {
        Ok(classes) => classes,
        Err(e) => {
            return Ok(error_response(
                &e,
                ErrorCode::ClassNotFound,
                ErrorCode::NotificationSendFailed,
            ));
        }
    };

    let draft = match prepare_quick_notification(quick_data, &classes) {
        Ok(draft) => draft,
        Err(rejection) => {
            return Ok(validation_failed(
                ErrorCode::ValidationFailed,
                rejection.message(),
            ));
        }
    };

    match storage.notifications().create(draft).await {
        Ok(notification) => {
            info!(
                "Quick {} notification {} sent to {} students",
                notification.notification_type,
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
