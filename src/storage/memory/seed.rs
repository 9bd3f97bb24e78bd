//! 内置样例数据
//!
//! 编译时从 fixtures/ 目录嵌入 JSON 文件，启动时一次性载入内存存储。

use rust_embed::Embed;
use serde::de::DeserializeOwned;

use crate::errors::{ClassDeskError, Result};
use crate::models::{
    assignments::entities::AssignmentEntity, classes::entities::ClassEntity,
    notifications::entities::NotificationEntity, students::entities::StudentEntity,
};

#[derive(Embed)]
#[folder = "fixtures/"]
struct FixtureFiles;

/// 一组样例数据
#[derive(Debug, Default, Clone)]
pub struct Fixtures {
    pub classes: Vec<ClassEntity>,
    pub students: Vec<StudentEntity>,
    pub assignments: Vec<AssignmentEntity>,
    pub notifications: Vec<NotificationEntity>,
}

/// 读取并解析一个嵌入的 JSON 文件，文件不存在时视为空集合
fn load_embedded_file<T: DeserializeOwned>(name: &str) -> Result<Vec<T>> {
    match FixtureFiles::get(name) {
        Some(file) => serde_json::from_slice(&file.data).map_err(|e| {
            ClassDeskError::serialization(format!("Failed to parse fixture {name}: {e}"))
        }),
        None => Ok(Vec::new()),
    }
}

impl Fixtures {
    pub fn load_embedded() -> Result<Self> {
        Ok(Self {
            classes: load_embedded_file("classes.json")?,
            students: load_embedded_file("students.json")?,
            assignments: load_embedded_file("assignments.json")?,
            notifications: load_embedded_file("notifications.json")?,
        })
    }
}
