use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{ComposerRegistry, ComposerService, composer_error};
use crate::errors::{ClassDeskError, Result};
use crate::models::ApiResponse;
use crate::models::composers::responses::{ComposerSubmitResponse, ComposerView};
use crate::models::notifications::entities::NotificationEntity;

/// 校验并发送
///
/// 进入 `Submitting` 后释放会话锁再等待存储层，同一会话上的第二次提交会得到 409。
/// 存储调用与状态回写放在独立任务中执行，请求被取消时提交仍会完成。
pub async fn submit_composer(
    service: &ComposerService,
    request: &HttpRequest,
    composer_id: &str,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let draft = match service
        .registry()
        .with_session(composer_id, |composer| composer.begin_submit())
    {
        Ok(draft) => draft,
        Err(e) => return Ok(composer_error(&e)),
    };

    let registry = service.shared_registry();
    let id = composer_id.to_string();
    let task = tokio::spawn(async move {
        let outcome = storage.notifications().create(draft).await;
        settle(&registry, &id, outcome)
    });

    let finished = match task.await {
        Ok(finished) => finished,
        Err(e) => {
            error!("Submit task for composer {} aborted: {}", composer_id, e);
            let registry = service.registry();
            settle(
                registry,
                composer_id,
                Err(ClassDeskError::storage_state(e.to_string())),
            )
        }
    };

    match finished {
        Ok((Ok(notification), composer)) => {
            info!("Composer {} submitted notification {}", composer_id, notification.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                ComposerSubmitResponse {
                    notification,
                    composer,
                },
                "Notification sent successfully",
            )))
        }
        Ok((Err(e), _)) => {
            error!("Composer {} failed to send: {}", composer_id, e);
            Ok(composer_error(&e))
        }
        Err(e) => Ok(composer_error(&e)),
    }
}

type Settled = (Result<NotificationEntity>, ComposerView);

// 回写提交结果，成功后会话回到 Idle 并从会话表移除
fn settle(
    registry: &ComposerRegistry,
    composer_id: &str,
    outcome: Result<NotificationEntity>,
) -> Result<Settled> {
    let (result, view) = registry.with_session(composer_id, |composer| {
        let result = composer.finish_submit(outcome);
        Ok((result, composer.view(composer_id)))
    })?;

    if result.is_ok() {
        registry.remove(composer_id);
    }
    Ok((result, view))
}
