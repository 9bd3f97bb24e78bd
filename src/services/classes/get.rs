use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::error_response;

pub async fn get_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: &str,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.classes().get_by_id(class_id).await {
        Ok(class) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            class,
            "Class information retrieved successfully",
        ))),
        Err(e) => Ok(error_response(
            &e,
            ErrorCode::ClassNotFound,
            ErrorCode::InternalServerError,
        )),
    }
}
