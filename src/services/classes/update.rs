use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ClassService;
use crate::models::classes::requests::UpdateClassRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{error_response, validation_failed};
use crate::utils::validate::validate_optional;

pub async fn update_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: &str,
    update_data: UpdateClassRequest,
) -> ActixResult<HttpResponse> {
    let checked = validate_optional(update_data.name.as_deref(), "Class name cannot be empty")
        .and_then(|_| validate_optional(update_data.subject.as_deref(), "Subject cannot be empty"));
    if let Err(msg) = checked {
        return Ok(validation_failed(ErrorCode::ClassUpdateFailed, msg));
    }

    let storage = service.get_storage(request)?;

    match storage.classes().update(class_id, update_data).await {
        Ok(class) => {
            info!("Class {} updated", class.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                class,
                "Class updated successfully",
            )))
        }
        Err(e) => Ok(error_response(
            &e,
            ErrorCode::ClassNotFound,
            ErrorCode::ClassUpdateFailed,
        )),
    }
}
