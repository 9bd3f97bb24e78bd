use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::error_response;

pub async fn get_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: &str,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.assignments().get_by_id(assignment_id).await {
        Ok(assignment) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            assignment,
            "Assignment retrieved successfully",
        ))),
        Err(e) => Ok(error_response(
            &e,
            ErrorCode::AssignmentNotFound,
            ErrorCode::InternalServerError,
        )),
    }
}
