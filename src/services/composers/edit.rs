use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ComposerService, composer_error};
use crate::errors::ClassDeskError;
use crate::models::composers::requests::{ApplyTemplateRequest, UpdateComposerFieldsRequest};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::error_response;

pub async fn apply_template(
    service: &ComposerService,
    composer_id: &str,
    body: ApplyTemplateRequest,
) -> ActixResult<HttpResponse> {
    let result = service.registry().with_session(composer_id, |composer| {
        composer.apply_template(body.notification_type)?;
        Ok(composer.view(composer_id))
    });

    match result {
        Ok(view) => Ok(HttpResponse::Ok().json(ApiResponse::success(view, "Template applied"))),
        Err(e) => Ok(composer_error(&e)),
    }
}

pub async fn update_fields(
    service: &ComposerService,
    composer_id: &str,
    body: UpdateComposerFieldsRequest,
) -> ActixResult<HttpResponse> {
    let result = service.registry().with_session(composer_id, |composer| {
        if let Some(subject) = body.subject {
            composer.set_subject(subject)?;
        }
        if let Some(message) = body.message {
            composer.set_message(message)?;
        }
        if let Some(assignment_id) = body.assignment_id {
            composer.set_assignment(assignment_id)?;
        }
        Ok(composer.view(composer_id))
    });

    match result {
        Ok(view) => Ok(HttpResponse::Ok().json(ApiResponse::success(view, "Composer updated"))),
        Err(e) => Ok(composer_error(&e)),
    }
}

pub async fn toggle_class(
    service: &ComposerService,
    request: &HttpRequest,
    composer_id: &str,
    class_id: &str,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    // 先在锁外读取班级列表
    let classes = match storage.classes().get_all().await {
        Ok(classes) => classes,
        Err(e) => {
            return Ok(error_response(
                &e,
                ErrorCode::ClassNotFound,
                ErrorCode::InternalServerError,
            ));
        }
    };

    let result = service.registry().with_session(composer_id, |composer| {
        let toggled = composer.toggle_class(class_id, &classes)?;
        Ok((toggled, composer.view(composer_id)))
    });

    match result {
        Ok((Some(_), view)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            view,
            "Class selection updated",
        ))),
        Ok((None, _)) => Ok(error_response(
            &ClassDeskError::entity_not_found("Class", class_id),
            ErrorCode::ClassNotFound,
            ErrorCode::InternalServerError,
        )),
        Err(e) => Ok(composer_error(&e)),
    }
}
