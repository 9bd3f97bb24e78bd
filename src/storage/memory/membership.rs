//! 班级与学生的成员关系
//!
//! 关系只在这里保存一份，`ClassEntity::student_ids` 和
//! `StudentEntity::class_ids` 都是读取时从这里派生的。
//! 删除班级或学生不会清理关系，悬空的 id 由调用方按“未知”处理。

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::errors::{ClassDeskError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Membership {
    class_id: String,
    student_id: String,
}

#[derive(Debug, Default)]
pub(crate) struct MembershipTable {
    edges: RwLock<Vec<Membership>>,
}

/// 去重并保持首次出现的顺序
fn dedup_ids(ids: &[String]) -> Vec<&String> {
    let mut seen: Vec<&String> = Vec::with_capacity(ids.len());
    for id in ids {
        if !seen.contains(&id) {
            seen.push(id);
        }
    }
    seen
}

impl MembershipTable {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Membership>>> {
        self.edges
            .read()
            .map_err(|_| ClassDeskError::storage_state("membership lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Membership>>> {
        self.edges
            .write()
            .map_err(|_| ClassDeskError::storage_state("membership lock poisoned"))
    }

    /// 班级的学生，按加入顺序
    pub fn students_of(&self, class_id: &str) -> Result<Vec<String>> {
        Ok(self
            .read()?
            .iter()
            .filter(|edge| edge.class_id == class_id)
            .map(|edge| edge.student_id.clone())
            .collect())
    }

    /// 学生所在的班级，按加入顺序
    pub fn classes_of(&self, student_id: &str) -> Result<Vec<String>> {
        Ok(self
            .read()?
            .iter()
            .filter(|edge| edge.student_id == student_id)
            .map(|edge| edge.class_id.clone())
            .collect())
    }

    /// 添加一条关系，已存在时返回 false
    pub fn enrol(&self, class_id: &str, student_id: &str) -> Result<bool> {
        let mut edges = self.write()?;
        let exists = edges
            .iter()
            .any(|edge| edge.class_id == class_id && edge.student_id == student_id);
        if !exists {
            edges.push(Membership {
                class_id: class_id.to_string(),
                student_id: student_id.to_string(),
            });
        }
        Ok(!exists)
    }

    /// 用给定列表整体替换班级的学生
    pub fn replace_students_of(&self, class_id: &str, student_ids: &[String]) -> Result<()> {
        let wanted = dedup_ids(student_ids);
        let mut edges = self.write()?;
        edges.retain(|edge| edge.class_id != class_id || wanted.contains(&&edge.student_id));
        for student_id in wanted {
            let exists = edges
                .iter()
                .any(|edge| edge.class_id == class_id && &edge.student_id == student_id);
            if !exists {
                edges.push(Membership {
                    class_id: class_id.to_string(),
                    student_id: student_id.clone(),
                });
            }
        }
        Ok(())
    }

    /// 用给定列表整体替换学生所在的班级
    pub fn replace_classes_of(&self, student_id: &str, class_ids: &[String]) -> Result<()> {
        let wanted = dedup_ids(class_ids);
        let mut edges = self.write()?;
        edges.retain(|edge| edge.student_id != student_id || wanted.contains(&&edge.class_id));
        for class_id in wanted {
            let exists = edges
                .iter()
                .any(|edge| &edge.class_id == class_id && edge.student_id == student_id);
            if !exists {
                edges.push(Membership {
                    class_id: class_id.clone(),
                    student_id: student_id.to_string(),
                });
            }
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }
}
