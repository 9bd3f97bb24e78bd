use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 批量删除结果
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "student.ts")]
pub struct BulkDeleteResponse {
    pub deleted: usize,
}
