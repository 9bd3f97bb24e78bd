pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::common::storage_from_request;
use crate::models::classes::requests::{CreateClassRequest, UpdateClassRequest};
use crate::storage::Storage;

pub struct ClassService {
    storage: Option<Arc<dyn Storage>>,
}

impl ClassService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => storage_from_request(request),
        }
    }

    // 获取全部班级
    pub async fn list_classes(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_classes(self, request).await
    }

    pub async fn create_class(
        &self,
        request: &HttpRequest,
        class_data: CreateClassRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_class(self, request, class_data).await
    }

    // 根据班级 ID 获取班级信息
    pub async fn get_class(&self, request: &HttpRequest, class_id: &str) -> ActixResult<HttpResponse> {
        get::get_class(self, request, class_id).await
    }

    // 更新班级信息，student_ids 会整体替换成员
    pub async fn update_class(
        &self,
        request: &HttpRequest,
        class_id: &str,
        update_data: UpdateClassRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_class(self, request, class_id, update_data).await
    }

    pub async fn delete_class(
        &self,
        request: &HttpRequest,
        class_id: &str,
    ) -> ActixResult<HttpResponse> {
        delete::delete_class(self, request, class_id).await
    }
}
