use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::assignments::requests::{
    AssignmentQueryParams, CreateAssignmentRequest, UpdateAssignmentRequest,
};
use crate::services::AssignmentService;

static ASSIGNMENT_SERVICE: Lazy<AssignmentService> = Lazy::new(AssignmentService::new_lazy);

pub async fn list_assignments(
    req: HttpRequest,
    query: web::Query<AssignmentQueryParams>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .list_assignments(&req, query.into_inner())
        .await
}

pub async fn create_assignment(
    req: HttpRequest,
    assignment_data: web::Json<CreateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .create_assignment(&req, assignment_data.into_inner())
        .await
}

pub async fn get_assignment(
    req: HttpRequest,
    assignment_id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.get_assignment(&req, &assignment_id).await
}

pub async fn update_assignment(
    req: HttpRequest,
    assignment_id: web::Path<String>,
    update_data: web::Json<UpdateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .update_assignment(&req, &assignment_id, update_data.into_inner())
        .await
}

pub async fn delete_assignment(
    req: HttpRequest,
    assignment_id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .delete_assignment(&req, &assignment_id)
        .await
}

pub fn configure_assignments_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/assignments")
            .service(
                web::resource("")
                    .route(web::get().to(list_assignments))
                    .route(web::post().to(create_assignment)),
            )
            .service(
                web::resource("/{assignment_id}")
                    .route(web::get().to(get_assignment))
                    .route(web::put().to(update_assignment))
                    .route(web::delete().to(delete_assignment)),
            ),
    );
}
