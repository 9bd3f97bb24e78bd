use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ClassService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::error_response;

// 删除班级不会级联删除作业或成员关系
pub async fn delete_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: &str,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.classes().delete(class_id).await {
        Ok(_) => {
            info!("Class {} deleted", class_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Class deleted successfully")))
        }
        Err(e) => Ok(error_response(
            &e,
            ErrorCode::ClassNotFound,
            ErrorCode::ClassDeleteFailed,
        )),
    }
}
