use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::StudentService;
use crate::models::students::requests::UpdateStudentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{error_response, validation_failed};
use crate::utils::validate::{validate_email, validate_optional};

pub async fn update_student(
    service: &StudentService,
    request: &HttpRequest,
    student_id: &str,
    update_data: UpdateStudentRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_optional(update_data.name.as_deref(), "Student name cannot be empty")
    {
        return Ok(validation_failed(ErrorCode::StudentUpdateFailed, msg));
    }
    if let Some(email) = &update_data.email
        && let Err(msg) = validate_email(email)
    {
        return Ok(validation_failed(ErrorCode::StudentEmailInvalid, msg));
    }

    let storage = service.get_storage(request)?;

    match storage.students().update(student_id, update_data).await {
        Ok(student) => {
            info!("Student {} updated", student.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                student,
                "Student updated successfully",
            )))
        }
        Err(e) => Ok(error_response(
            &e,
            ErrorCode::StudentNotFound,
            ErrorCode::StudentUpdateFailed,
        )),
    }
}
