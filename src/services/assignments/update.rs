use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AssignmentService;
use crate::models::assignments::requests::UpdateAssignmentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{error_response, validation_failed};
use crate::utils::validate::validate_optional;

pub async fn update_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: &str,
    update_data: UpdateAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let checked = validate_optional(
        update_data.title.as_deref(),
        "Assignment title cannot be empty",
    )
    .and_then(|_| validate_optional(update_data.class_id.as_deref(), "Please select a class"));
    if let Err(msg) = checked {
        return Ok(validation_failed(ErrorCode::AssignmentUpdateFailed, msg));
    }

    let storage = service.get_storage(request)?;

    match storage.assignments().update(assignment_id, update_data).await {
        Ok(assignment) => {
            info!("Assignment {} updated", assignment.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                assignment,
                "Assignment updated successfully",
            )))
        }
        Err(e) => Ok(error_response(
            &e,
            ErrorCode::AssignmentNotFound,
            ErrorCode::AssignmentUpdateFailed,
        )),
    }
}
