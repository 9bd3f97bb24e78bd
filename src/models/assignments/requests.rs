use chrono::NaiveDate;
use serde::Deserialize;
use ts_rs::TS;

use super::entities::AssignmentFilter;

/// 创建作业请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "assignment.ts")]
pub struct CreateAssignmentRequest {
    pub class_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub due_date: NaiveDate, // 形如 "2026-01-24"
    #[serde(default)]
    pub attachments: Vec<String>,
}

/// 更新作业请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export, export_to = "assignment.ts")]
pub struct UpdateAssignmentRequest {
    pub class_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub attachments: Option<Vec<String>>,
}

/// 作业列表查询参数
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "assignment.ts")]
pub struct AssignmentQueryParams {
    pub filter: Option<AssignmentFilter>,
}
