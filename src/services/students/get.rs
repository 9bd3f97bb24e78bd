use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::error_response;

pub async fn get_student(
    service: &StudentService,
    request: &HttpRequest,
    student_id: &str,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.students().get_by_id(student_id).await {
        Ok(student) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            student,
            "Student information retrieved successfully",
        ))),
        Err(e) => Ok(error_response(
            &e,
            ErrorCode::StudentNotFound,
            ErrorCode::InternalServerError,
        )),
    }
}
