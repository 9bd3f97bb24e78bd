use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use tracing::error;

use crate::errors::ClassDeskError;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

/// 从应用数据中取出存储实例
pub(crate) fn storage_from_request(request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
    request
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("Storage not found in app data"))
}

/// 把领域错误转换为 HTTP 响应
///
/// `not_found` 用于记录不存在的情况，`failed` 用于其余内部错误。
pub(crate) fn error_response(
    err: &ClassDeskError,
    not_found: ErrorCode,
    failed: ErrorCode,
) -> HttpResponse {
    match err {
        ClassDeskError::NotFound(_) => {
            HttpResponse::NotFound().json(ApiResponse::from_error(not_found, err))
        }
        ClassDeskError::Validation(_) => HttpResponse::BadRequest()
            .json(ApiResponse::from_error(ErrorCode::ValidationFailed, err)),
        ClassDeskError::Conflict(_) => {
            HttpResponse::Conflict().json(ApiResponse::from_error(ErrorCode::Conflict, err))
        }
        _ => {
            error!("{}", err.format_simple());
            HttpResponse::InternalServerError().json(ApiResponse::from_error(failed, err))
        }
    }
}

/// 请求体校验失败
pub(crate) fn validation_failed(code: ErrorCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(code, message))
}
