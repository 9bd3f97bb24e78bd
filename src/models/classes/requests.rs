use serde::Deserialize;
use ts_rs::TS;

// 创建班级请求
//
// 客户端携带的 id / created_at 等字段会被忽略，由存储层生成
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "class.ts")]
pub struct CreateClassRequest {
    pub name: String,
    pub subject: String,
    #[serde(default)]
    pub student_ids: Vec<String>,
}

// 更新班级请求（浅合并，未知字段直接拒绝）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export, export_to = "class.ts")]
pub struct UpdateClassRequest {
    pub name: Option<String>,
    pub subject: Option<String>,
    // 整体替换班级成员
    pub student_ids: Option<Vec<String>>,
}
