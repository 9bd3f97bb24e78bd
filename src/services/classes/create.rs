use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ClassService;
use crate::models::classes::requests::CreateClassRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{error_response, validation_failed};
use crate::utils::validate::validate_required;

pub async fn create_class(
    service: &ClassService,
    request: &HttpRequest,
    class_data: CreateClassRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_class_fields(&class_data) {
        return Ok(validation_failed(ErrorCode::ClassCreationFailed, msg));
    }

    let storage = service.get_storage(request)?;

    match storage.classes().create(class_data).await {
        Ok(class) => {
            info!("Class {} ({}) created", class.id, class.name);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                class,
                "Class created successfully",
            )))
        }
        Err(e) => Ok(error_response(
            &e,
            ErrorCode::ClassNotFound,
            ErrorCode::ClassCreationFailed,
        )),
    }
}

fn validate_class_fields(class_data: &CreateClassRequest) -> Result<(), &'static str> {
    validate_required(&class_data.name, "Class name is required")?;
    validate_required(&class_data.subject, "Subject is required")
}
