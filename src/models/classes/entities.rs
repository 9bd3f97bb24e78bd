use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "class.ts")]
pub struct ClassEntity {
    // 班级ID
    pub id: String,
    // 班级名称
    pub name: String,
    // 科目
    pub subject: String,
    // 成员学生ID，由成员关系表派生
    #[serde(default)]
    pub student_ids: Vec<String>,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl ClassEntity {
    pub fn has_student(&self, student_id: &str) -> bool {
        self.student_ids.iter().any(|id| id == student_id)
    }

    pub fn student_count(&self) -> usize {
        self.student_ids.len()
    }
}
