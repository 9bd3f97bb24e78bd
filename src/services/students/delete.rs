use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::error_response;

pub async fn delete_student(
    service: &StudentService,
    request: &HttpRequest,
    student_id: &str,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.students().delete(student_id).await {
        Ok(_) => {
            info!("Student {} deleted", student_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Student deleted successfully")))
        }
        Err(e) => Ok(error_response(
            &e,
            ErrorCode::StudentNotFound,
            ErrorCode::StudentDeleteFailed,
        )),
    }
}
