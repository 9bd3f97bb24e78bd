use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::NotificationService;
use crate::domain::queries::notification_history;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::error_response;

pub async fn list_notifications(
    service: &NotificationService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.notifications().get_all().await {
        Ok(notifications) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            notification_history(notifications),
            "Notification history retrieved successfully",
        ))),
        Err(e) => Ok(error_response(
            &e,
            ErrorCode::NotificationNotFound,
            ErrorCode::InternalServerError,
        )),
    }
}
