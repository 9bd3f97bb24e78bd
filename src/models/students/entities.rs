use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "student.ts")]
pub struct StudentEntity {
    pub id: String,
    pub name: String,
    pub email: String,
    // 所在班级ID，由成员关系表派生
    #[serde(default)]
    pub class_ids: Vec<String>,
}
