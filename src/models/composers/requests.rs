use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::serde_helpers::deserialize_some;
use crate::models::notifications::entities::NotificationType;

// 选择模板
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export, export_to = "composer.ts")]
pub struct ApplyTemplateRequest {
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
}

// 修改表单字段，缺省字段保持不变
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export, export_to = "composer.ts")]
pub struct UpdateComposerFieldsRequest {
    pub subject: Option<String>,
    pub message: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub assignment_id: Option<Option<String>>,
}
