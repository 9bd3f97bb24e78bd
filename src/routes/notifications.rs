use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::notifications::requests::{
    CreateNotificationRequest, QuickNotifyRequest, UpdateNotificationRequest,
};
use crate::services::NotificationService;

static NOTIFICATION_SERVICE: Lazy<NotificationService> =
    Lazy::new(NotificationService::new_lazy);

pub async fn list_notifications(req: HttpRequest) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE.list_notifications(&req).await
}

pub async fn create_notification(
    req: HttpRequest,
    notification_data: web::Json<CreateNotificationRequest>,
) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE
        .create_notification(&req, notification_data.into_inner())
        .await
}

pub async fn quick_notify(
    req: HttpRequest,
    quick_data: web::Json<QuickNotifyRequest>,
) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE
        .quick_notify(&req, quick_data.into_inner())
        .await
}

pub async fn get_notification(
    req: HttpRequest,
    notification_id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE
        .get_notification(&req, &notification_id)
        .await
}

pub async fn update_notification(
    req: HttpRequest,
    notification_id: web::Path<String>,
    update_data: web::Json<UpdateNotificationRequest>,
) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE
        .update_notification(&req, &notification_id, update_data.into_inner())
        .await
}

pub async fn delete_notification(
    req: HttpRequest,
    notification_id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE
        .delete_notification(&req, &notification_id)
        .await
}

pub fn configure_notifications_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/notifications")
            .service(
                web::resource("")
                    .route(web::get().to(list_notifications))
                    .route(web::post().to(create_notification)),
            )
            .service(web::resource("/quick").route(web::post().to(quick_notify)))
            .service(
                web::resource("/{notification_id}")
                    .route(web::get().to(get_notification))
                    .route(web::put().to(update_notification))
                    .route(web::delete().to(delete_notification)),
            ),
    );
}
