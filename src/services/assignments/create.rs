use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AssignmentService;
use crate::models::assignments::requests::CreateAssignmentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{error_response, validation_failed};
use crate::utils::validate::validate_required;

pub async fn create_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_data: CreateAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let checked = validate_required(&assignment_data.title, "Assignment title is required")
        .and_then(|_| validate_required(&assignment_data.class_id, "Please select a class"));
    if let Err(msg) = checked {
        return Ok(validation_failed(ErrorCode::AssignmentCreationFailed, msg));
    }

    let storage = service.get_storage(request)?;

    // 新作业必须挂在现有班级下，之后班级被删除时允许悬挂
    if let Err(e) = storage.classes().get_by_id(&assignment_data.class_id).await {
        return Ok(error_response(
            &e,
            ErrorCode::ClassNotFound,
            ErrorCode::AssignmentCreationFailed,
        ));
    }

    match storage.assignments().create(assignment_data).await {
        Ok(assignment) => {
            info!(
                "Assignment {} created for class {}, due {}",
                assignment.id, assignment.class_id, assignment.due_date
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                assignment,
                "Assignment created successfully",
            )))
        }
        Err(e) => Ok(error_response(
            &e,
            ErrorCode::AssignmentNotFound,
            ErrorCode::AssignmentCreationFailed,
        )),
    }
}
