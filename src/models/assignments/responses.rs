use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::AssignmentEntity;

/// 各过滤条件下的作业数量
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "assignment.ts")]
pub struct AssignmentCounts {
    pub all: usize,
    pub upcoming: usize,
    pub overdue: usize,
}

/// 作业列表响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "assignment.ts")]
pub struct AssignmentListResponse {
    pub items: Vec<AssignmentEntity>,
    pub counts: AssignmentCounts,
}
