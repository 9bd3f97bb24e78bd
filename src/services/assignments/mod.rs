pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::common::storage_from_request;
use crate::models::assignments::requests::{
    AssignmentQueryParams, CreateAssignmentRequest, UpdateAssignmentRequest,
};
use crate::storage::Storage;

pub struct AssignmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl AssignmentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => storage_from_request(request),
        }
    }

    // 作业列表，附带各过滤条件下的数量
    pub async fn list_assignments(
        &self,
        request: &HttpRequest,
        query: AssignmentQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_assignments(self, request, query).await
    }

    pub async fn create_assignment(
        &self,
        request: &HttpRequest,
        assignment_data: CreateAssignmentRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_assignment(self, request, assignment_data).await
    }

    pub async fn get_assignment(
        &self,
        request: &HttpRequest,
        assignment_id: &str,
    ) -> ActixResult<HttpResponse> {
        get::get_assignment(self, request, assignment_id).await
    }

    pub async fn update_assignment(
        &self,
        request: &HttpRequest,
        assignment_id: &str,
        update_data: UpdateAssignmentRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_assignment(self, request, assignment_id, update_data).await
    }

    pub async fn delete_assignment(
        &self,
        request: &HttpRequest,
        assignment_id: &str,
    ) -> ActixResult<HttpResponse> {
        delete::delete_assignment(self, request, assignment_id).await
    }
}
