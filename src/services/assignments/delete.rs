use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AssignmentService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::error_response;

pub async fn delete_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: &str,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.assignments().delete(assignment_id).await {
        Ok(_) => {
            info!("Assignment {} deleted", assignment_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Assignment deleted successfully",
            )))
        }
        Err(e) => Ok(error_response(
            &e,
            ErrorCode::AssignmentNotFound,
            ErrorCode::AssignmentDeleteFailed,
        )),
    }
}
