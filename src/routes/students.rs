use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::students::requests::{
    BulkDeleteStudentsRequest, CreateStudentRequest, StudentQueryParams, UpdateStudentRequest,
};
use crate::services::StudentService;

static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);

pub async fn list_students(
    req: HttpRequest,
    query: web::Query<StudentQueryParams>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .list_students(&req, query.into_inner())
        .await
}

pub async fn create_student(
    req: HttpRequest,
    student_data: web::Json<CreateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .create_student(&req, student_data.into_inner())
        .await
}

pub async fn bulk_delete_students(
    req: HttpRequest,
    body: web::Json<BulkDeleteStudentsRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .bulk_delete_students(&req, body.into_inner())
        .await
}

pub async fn get_student(
    req: HttpRequest,
    student_id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.get_student(&req, &student_id).await
}

pub async fn update_student(
    req: HttpRequest,
    student_id: web::Path<String>,
    update_data: web::Json<UpdateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .update_student(&req, &student_id, update_data.into_inner())
        .await
}

pub async fn delete_student(
    req: HttpRequest,
    student_id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.delete_student(&req, &student_id).await
}

pub fn configure_students_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/students")
            .service(
                web::resource("")
                    .route(web::get().to(list_students))
                    .route(web::post().to(create_student)),
            )
            // 需在 /{student_id} 之前注册
            .service(web::resource("/bulk-delete").route(web::post().to(bulk_delete_students)))
            .service(
                web::resource("/{student_id}")
                    .route(web::get().to(get_student))
                    .route(web::put().to(update_student))
                    .route(web::delete().to(delete_student)),
            ),
    );
}
