use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::error_response;

pub async fn list_classes(
    service: &ClassService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.classes().get_all().await {
        Ok(classes) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            classes,
            "Classes retrieved successfully",
        ))),
        Err(e) => Ok(error_response(
            &e,
            ErrorCode::ClassNotFound,
            ErrorCode::InternalServerError,
        )),
    }
}
