use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::NotificationService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::error_response;

pub async fn delete_notification(
    service: &NotificationService,
    request: &HttpRequest,
    notification_id: &str,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.notifications().delete(notification_id).await {
        Ok(_) => {
            info!("Notification {} deleted", notification_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Notification deleted successfully",
            )))
        }
        Err(e) => Ok(error_response(
            &e,
            ErrorCode::NotificationNotFound,
            ErrorCode::NotificationDeleteFailed,
        )),
    }
}
