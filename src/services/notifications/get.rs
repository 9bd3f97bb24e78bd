use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::NotificationService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::error_response;

pub async fn get_notification(
    service: &NotificationService,
    request: &HttpRequest,
    notification_id: &str,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.notifications().get_by_id(notification_id).await {
        Ok(notification) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            notification,
            "Notification retrieved successfully",
        ))),
        Err(e) => Ok(error_response(
            &e,
            ErrorCode::NotificationNotFound,
            ErrorCode::InternalServerError,
        )),
    }
}
