use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::composers::requests::{ApplyTemplateRequest, UpdateComposerFieldsRequest};
use crate::services::ComposerService;

// 会话表随服务实例常驻内存
static COMPOSER_SERVICE: Lazy<ComposerService> = Lazy::new(ComposerService::new_lazy);

pub async fn open_composer() -> ActixResult<HttpResponse> {
    COMPOSER_SERVICE.open_composer().await
}

pub async fn get_composer(composer_id: web::Path<String>) -> ActixResult<HttpResponse> {
    COMPOSER_SERVICE.get_composer(&composer_id).await
}

pub async fn close_composer(composer_id: web::Path<String>) -> ActixResult<HttpResponse> {
    COMPOSER_SERVICE.close_composer(&composer_id).await
}

pub async fn apply_template(
    composer_id: web::Path<String>,
    body: web::Json<ApplyTemplateRequest>,
) -> ActixResult<HttpResponse> {
    COMPOSER_SERVICE
        .apply_template(&composer_id, body.into_inner())
        .await
}

pub async fn update_fields(
    composer_id: web::Path<String>,
    body: web::Json<UpdateComposerFieldsRequest>,
) -> ActixResult<HttpResponse> {
    COMPOSER_SERVICE
        .update_fields(&composer_id, body.into_inner())
        .await
}

pub async fn toggle_class(
    req: HttpRequest,
    path: web::Path<(String, String)>,
) -> ActixResult<HttpResponse> {
    let (composer_id, class_id) = path.into_inner();
    COMPOSER_SERVICE
        .toggle_class(&req, &composer_id, &class_id)
        .await
}

pub async fn submit(req: HttpRequest, composer_id: web::Path<String>) -> ActixResult<HttpResponse> {
    COMPOSER_SERVICE.submit(&req, &composer_id).await
}

pub fn configure_composers_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/composers")
            .service(web::resource("").route(web::post().to(open_composer)))
            .service(
                web::resource("/{composer_id}")
                    .route(web::get().to(get_composer))
                    .route(web::delete().to(close_composer)),
            )
            .service(web::resource("/{composer_id}/template").route(web::post().to(apply_template)))
            .service(web::resource("/{composer_id}/fields").route(web::put().to(update_fields)))
            .service(
                web::resource("/{composer_id}/classes/{class_id}")
                    .route(web::post().to(toggle_class)),
            )
            .service(web::resource("/{composer_id}/submit").route(web::post().to(submit))),
    );
}
