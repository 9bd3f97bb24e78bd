use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::StudentService;
use crate::models::students::requests::CreateStudentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{error_response, validation_failed};
use crate::utils::validate::{validate_email, validate_required};

pub async fn create_student(
    service: &StudentService,
    request: &HttpRequest,
    mut student_data: CreateStudentRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_required(&student_data.name, "Student name is required") {
        return Ok(validation_failed(ErrorCode::StudentCreationFailed, msg));
    }
    if let Err(msg) = validate_email(&student_data.email) {
        return Ok(validation_failed(ErrorCode::StudentEmailInvalid, msg));
    }
    student_data.email = student_data.email.trim().to_string();

    let storage = service.get_storage(request)?;

    match storage.students().create(student_data).await {
        Ok(student) => {
            info!(
                "Student {} created and enrolled in {} classes",
                student.id,
                student.class_ids.len()
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                student,
                "Student created successfully",
            )))
        }
        Err(e) => Ok(error_response(
            &e,
            ErrorCode::StudentNotFound,
            ErrorCode::StudentCreationFailed,
        )),
    }
}
