use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::domain::queries::{assignment_counts, filter_assignments};
use crate::models::assignments::{
    requests::AssignmentQueryParams, responses::AssignmentListResponse,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::error_response;

pub async fn list_assignments(
    service: &AssignmentService,
    request: &HttpRequest,
    query: AssignmentQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let assignments = match storage.assignments().get_all().await {
        Ok(assignments) => assignments,
        Err(e) => {
            return Ok(error_response(
                &e,
                ErrorCode::AssignmentNotFound,
                ErrorCode::InternalServerError,
            ));
        }
    };

    let now = chrono::Utc::now();
    let counts = assignment_counts(&assignments, now);
    let items = filter_assignments(assignments, query.filter.unwrap_or_default(), now);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        AssignmentListResponse { items, counts },
        "Assignments retrieved successfully",
    )))
}
