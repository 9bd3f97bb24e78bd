pub mod bulk_delete;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::common::storage_from_request;
use crate::models::students::requests::{
    BulkDeleteStudentsRequest, CreateStudentRequest, StudentQueryParams, UpdateStudentRequest,
};
use crate::storage::Storage;

pub struct StudentService {
    storage: Option<Arc<dyn Storage>>,
}

impl StudentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => storage_from_request(request),
        }
    }

    // 学生列表，支持按姓名或邮箱搜索
    pub async fn list_students(
        &self,
        request: &HttpRequest,
        query: StudentQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_students(self, request, query).await
    }

    // 添加学生并加入指定班级
    pub async fn create_student(
        &self,
        request: &HttpRequest,
        student_data: CreateStudentRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_student(self, request, student_data).await
    }

    pub async fn get_student(
        &self,
        request: &HttpRequest,
        student_id: &str,
    ) -> ActixResult<HttpResponse> {
        get::get_student(self, request, student_id).await
    }

    pub async fn update_student(
        &self,
        request: &HttpRequest,
        student_id: &str,
        update_data: UpdateStudentRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_student(self, request, student_id, update_data).await
    }

    pub async fn delete_student(
        &self,
        request: &HttpRequest,
        student_id: &str,
    ) -> ActixResult<HttpResponse> {
        delete::delete_student(self, request, student_id).await
    }

    pub async fn bulk_delete_students(
        &self,
        request: &HttpRequest,
        body: BulkDeleteStudentsRequest,
    ) -> ActixResult<HttpResponse> {
        bulk_delete::bulk_delete_students(self, request, body).await
    }
}
