use actix_web::{HttpResponse, Result as ActixResult};
use tracing::info;

use super::{ComposerService, composer_error};
use crate::models::ApiResponse;

pub async fn open_composer(service: &ComposerService) -> ActixResult<HttpResponse> {
    match service.registry().open() {
        Ok(view) => {
            info!("Composer session {} opened", view.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(view, "Composer opened")))
        }
        Err(e) => Ok(composer_error(&e)),
    }
}

pub async fn get_composer(
    service: &ComposerService,
    composer_id: &str,
) -> ActixResult<HttpResponse> {
    match service.registry().view(composer_id) {
        Ok(view) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            view,
            "Composer retrieved successfully",
        ))),
        Err(e) => Ok(composer_error(&e)),
    }
}

pub async fn close_composer(
    service: &ComposerService,
    composer_id: &str,
) -> ActixResult<HttpResponse> {
    match service.registry().close(composer_id) {
        Ok(()) => {
            info!("Composer session {} closed", composer_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Composer closed")))
        }
        Err(e) => Ok(composer_error(&e)),
    }
}
