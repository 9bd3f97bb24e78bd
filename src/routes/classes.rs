use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::classes::requests::{CreateClassRequest, UpdateClassRequest};
use crate::services::ClassService;

// 懒加载的全局 CLASS_SERVICE 实例
static CLASS_SERVICE: Lazy<ClassService> = Lazy::new(ClassService::new_lazy);

// HTTP处理程序
pub async fn list_classes(req: HttpRequest) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.list_classes(&req).await
}

pub async fn create_class(
    req: HttpRequest,
    class_data: web::Json<CreateClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .create_class(&req, class_data.into_inner())
        .await
}

pub async fn get_class(req: HttpRequest, class_id: web::Path<String>) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.get_class(&req, &class_id).await
}

pub async fn update_class(
    req: HttpRequest,
    class_id: web::Path<String>,
    update_data: web::Json<UpdateClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .update_class(&req, &class_id, update_data.into_inner())
        .await
}

pub async fn delete_class(
    req: HttpRequest,
    class_id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.delete_class(&req, &class_id).await
}

// 配置路由
pub fn configure_classes_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/classes")
            .service(
                web::resource("")
                    .route(web::get().to(list_classes))
                    .route(web::post().to(create_class)),
            )
            .service(
                web::resource("/{class_id}")
                    .route(web::get().to(get_class))
                    .route(web::put().to(update_class))
                    .route(web::delete().to(delete_class)),
            ),
    );
}
