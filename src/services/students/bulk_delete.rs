use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::StudentService;
use crate::errors::ClassDeskError;
use crate::models::students::{requests::BulkDeleteStudentsRequest, responses::BulkDeleteResponse};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{error_response, validation_failed};

/// 批量删除学生
///
/// 先确认所有 id 都存在，遇到第一个不存在的 id 即返回 404，此时不删除任何记录。
pub async fn bulk_delete_students(
    service: &StudentService,
    request: &HttpRequest,
    body: BulkDeleteStudentsRequest,
) -> ActixResult<HttpResponse> {
    if body.ids.is_empty() {
        return Ok(validation_failed(
            ErrorCode::StudentDeleteFailed,
            "Please select at least one student",
        ));
    }

    let storage = service.get_storage(request)?;
    let students = match storage.students().get_all().await {
        Ok(students) => students,
        Err(e) => {
            return Ok(error_response(
                &e,
                ErrorCode::StudentNotFound,
                ErrorCode::StudentDeleteFailed,
            ));
        }
    };

    if let Some(missing) = body
        .ids
        .iter()
        .find(|id| !students.iter().any(|s| &s.id == *id))
    {
        let err = ClassDeskError::entity_not_found("Student", missing);
        return Ok(error_response(
            &err,
            ErrorCode::StudentNotFound,
            ErrorCode::StudentDeleteFailed,
        ));
    }

    let mut deleted = 0;
    for id in &body.ids {
        match storage.students().delete(id).await {
            Ok(_) => deleted += 1,
            // 重复 id 在第一次删除后即不存在
            Err(e) if e.is_not_found() => {}
            Err(e) => {
                return Ok(error_response(
                    &e,
                    ErrorCode::StudentNotFound,
                    ErrorCode::StudentDeleteFailed,
                ));
            }
        }
    }

    info!("Bulk deleted {} students", deleted);
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        BulkDeleteResponse { deleted },
        "Students deleted successfully",
    )))
}
