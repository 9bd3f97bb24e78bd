//! 通知编辑会话
//!
//! 每个会话是一个独立的 [`NotificationComposer`]，以 UUID 为键保存在 `DashMap` 中。
//! 会话锁只在同步修改期间持有，等待存储层时不持有。
//! 提交成功后会话回到 Idle 并被移除，之后需重新打开。

pub mod edit;
pub mod session;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use dashmap::DashMap;
use std::sync::Arc;

use super::common::storage_from_request;
use crate::domain::NotificationComposer;
use crate::errors::{ClassDeskError, Result};
use crate::models::composers::{
    requests::{ApplyTemplateRequest, UpdateComposerFieldsRequest},
    responses::ComposerView,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

/// 会话表
#[derive(Default)]
pub struct ComposerRegistry {
    sessions: DashMap<String, NotificationComposer>,
}

impl ComposerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新建并打开一个会话，返回会话 id
    pub fn open(&self) -> Result<ComposerView> {
        let id = uuid::Uuid::new_v4().to_string();
        let mut composer = NotificationComposer::new();
        composer.open()?;
        let view = composer.view(&id);
        self.sessions.insert(id, composer);
        Ok(view)
    }

    /// 在会话上执行一次同步操作
    pub fn with_session<R>(
        &self,
        id: &str,
        f: impl FnOnce(&mut NotificationComposer) -> Result<R>,
    ) -> Result<R> {
        let mut composer = self
            .sessions
            .get_mut(id)
            .ok_or_else(|| ClassDeskError::entity_not_found("Composer", id))?;
        f(composer.value_mut())
    }

    pub fn view(&self, id: &str) -> Result<ComposerView> {
        self.with_session(id, |composer| Ok(composer.view(id)))
    }

    /// 关闭并移除会话，提交中的会话不能关闭
    pub fn close(&self, id: &str) -> Result<()> {
        self.with_session(id, |composer| composer.close())?;
        self.sessions.remove(id);
        Ok(())
    }

    /// 移除会话，不检查状态
    pub(crate) fn remove(&self, id: &str) {
        self.sessions.remove(id);
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

pub struct ComposerService {
    storage: Option<Arc<dyn Storage>>,
    registry: Arc<ComposerRegistry>,
}

impl ComposerService {
    pub fn new_lazy() -> Self {
        Self {
            storage: None,
            registry: Arc::new(ComposerRegistry::new()),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_storage(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage: Some(storage),
            registry: Arc::new(ComposerRegistry::new()),
        }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => storage_from_request(request),
        }
    }

    pub(crate) fn registry(&self) -> &ComposerRegistry {
        &self.registry
    }

    // 提交任务需要独立持有会话表
    pub(crate) fn shared_registry(&self) -> Arc<ComposerRegistry> {
        self.registry.clone()
    }

    pub async fn open_composer(&self) -> ActixResult<HttpResponse> {
        session::open_composer(self).await
    }

    pub async fn get_composer(&self, composer_id: &str) -> ActixResult<HttpResponse> {
        session::get_composer(self, composer_id).await
    }

    pub async fn close_composer(&self, composer_id: &str) -> ActixResult<HttpResponse> {
        session::close_composer(self, composer_id).await
    }

    pub async fn apply_template(
        &self,
        composer_id: &str,
        body: ApplyTemplateRequest,
    ) -> ActixResult<HttpResponse> {
        edit::apply_template(self, composer_id, body).await
    }

    pub async fn update_fields(
        &self,
        composer_id: &str,
        body: UpdateComposerFieldsRequest,
    ) -> ActixResult<HttpResponse> {
        edit::update_fields(self, composer_id, body).await
    }

    // 切换班级，收件人随之增量更新
    pub async fn toggle_class(
        &self,
        request: &HttpRequest,
        composer_id: &str,
        class_id: &str,
    ) -> ActixResult<HttpResponse> {
        edit::toggle_class(self, request, composer_id, class_id).await
    }

    pub async fn submit(
        &self,
        request: &HttpRequest,
        composer_id: &str,
    ) -> ActixResult<HttpResponse> {
        submit::submit_composer(self, request, composer_id).await
    }
}

/// 编辑会话相关错误使用更具体的业务码
pub(crate) fn composer_error(err: &ClassDeskError) -> HttpResponse {
    match err {
        ClassDeskError::NotFound(_) => HttpResponse::NotFound()
            .json(ApiResponse::from_error(ErrorCode::ComposerNotFound, err)),
        ClassDeskError::Conflict(_) => HttpResponse::Conflict()
            .json(ApiResponse::from_error(ErrorCode::ComposerBusy, err)),
        ClassDeskError::Validation(_) => HttpResponse::BadRequest()
            .json(ApiResponse::from_error(ErrorCode::ComposerValidationFailed, err)),
        _ => super::common::error_response(
            err,
            ErrorCode::ComposerNotFound,
            ErrorCode::NotificationSendFailed,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::composers::entities::ComposerState;

    #[test]
    fn test_registry_lifecycle() {
        let registry = ComposerRegistry::new();
        let view = registry.open().unwrap();
        assert_eq!(view.state, ComposerState::Editing);
        assert_eq!(registry.len(), 1);

        registry
            .with_session(&view.id, |c| c.set_subject("Hello"))
            .unwrap();
        assert_eq!(registry.view(&view.id).unwrap().subject, "Hello");

        registry.close(&view.id).unwrap();
        assert!(registry.is_empty());
        assert!(registry.view(&view.id).unwrap_err().is_not_found());
    }

    #[test]
    fn test_sessions_are_isolated() {
        let registry = ComposerRegistry::new();
        let a = registry.open().unwrap();
        let b = registry.open().unwrap();
        assert_ne!(a.id, b.id);

        registry.with_session(&a.id, |c| c.set_message("only a")).unwrap();
        assert!(registry.view(&b.id).unwrap().message.is_empty());
    }
}
