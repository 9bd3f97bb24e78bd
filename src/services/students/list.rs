use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::domain::queries::search_students;
use crate::models::students::requests::StudentQueryParams;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::error_response;

pub async fn list_students(
    service: &StudentService,
    request: &HttpRequest,
    query: StudentQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.students().get_all().await {
        Ok(students) => {
            let students = search_students(students, query.search.as_deref());
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                students,
                "Students retrieved successfully",
            )))
        }
        Err(e) => Ok(error_response(
            &e,
            ErrorCode::StudentNotFound,
            ErrorCode::InternalServerError,
        )),
    }
}
