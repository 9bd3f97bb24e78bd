use serde::Deserialize;
use ts_rs::TS;

// 添加学生请求，class_ids 会同时写入成员关系
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "student.ts")]
pub struct CreateStudentRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub class_ids: Vec<String>,
}

// 更新学生请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export, export_to = "student.ts")]
pub struct UpdateStudentRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub class_ids: Option<Vec<String>>,
}

// 学生列表查询参数
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "student.ts")]
pub struct StudentQueryParams {
    pub search: Option<String>,
}

// 批量删除学生
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export, export_to = "student.ts")]
pub struct BulkDeleteStudentsRequest {
    pub ids: Vec<String>,
}
