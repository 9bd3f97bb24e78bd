pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod quick;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::common::storage_from_request;
use crate::models::notifications::requests::{
    CreateNotificationRequest, QuickNotifyRequest, UpdateNotificationRequest,
};
use crate::storage::Storage;

pub struct NotificationService {
    storage: Option<Arc<dyn Storage>>,
}

impl NotificationService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => storage_from_request(request),
        }
    }

    // 通知历史，最新的在前
    pub async fn list_notifications(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_notifications(self, request).await
    }

    // 直接按收件人列表发送
    pub async fn create_notification(
        &self,
        request: &HttpRequest,
        notification_data: CreateNotificationRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_notification(self, request, notification_data).await
    }

    pub async fn get_notification(
        &self,
        request: &HttpRequest,
        notification_id: &str,
    ) -> ActixResult<HttpResponse> {
        get::get_notification(self, request, notification_id).await
    }

    pub async fn update_notification(
        &self,
        request: &HttpRequest,
        notification_id: &str,
        update_data: UpdateNotificationRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_notification(self, request, notification_id, update_data).await
    }

    pub async fn delete_notification(
        &self,
        request: &HttpRequest,
        notification_id: &str,
    ) -> ActixResult<HttpResponse> {
        delete::delete_notification(self, request, notification_id).await
    }

    // 首页快捷发送
    pub async fn quick_notify(
        &self,
        request: &HttpRequest,
        quick_data: QuickNotifyRequest,
    ) -> ActixResult<HttpResponse> {
        quick::quick_notify(self, request, quick_data).await
    }
}
