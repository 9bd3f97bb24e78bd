//! 收件人解析
//!
//! 把选中的班级映射为这些班级学生的并集。支持增量切换：
//! 取消选中某个班级时，只有不再属于任何其他已选班级的学生才会被移除。

use std::collections::HashSet;

use crate::models::classes::entities::ClassEntity;

/// 全量计算：选中班级学生 id 的并集，按首次出现顺序
///
/// 未知的班级 id 不贡献任何学生。
pub fn resolve_recipients(selected_class_ids: &[String], classes: &[ClassEntity]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut recipients = Vec::new();
    for class_id in selected_class_ids {
        let Some(class) = classes.iter().find(|c| &c.id == class_id) else {
            continue;
        };
        for student_id in &class.student_ids {
            if seen.insert(student_id.as_str()) {
                recipients.push(student_id.clone());
            }
        }
    }
    recipients
}

/// 增量维护的选择状态
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipientResolver {
    selected_class_ids: Vec<String>,
    recipients: Vec<String>,
}

impl RecipientResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_class_ids(&self) -> &[String] {
        &self.selected_class_ids
    }

    /// 当前解析出的收件人
    pub fn recipients(&self) -> &[String] {
        &self.recipients
    }

    pub fn is_selected(&self, class_id: &str) -> bool {
        self.selected_class_ids.iter().any(|id| id == class_id)
    }

    pub fn is_empty(&self) -> bool {
        self.recipients.is_empty()
    }

    /// 切换班级的选中状态，返回切换后是否处于选中
    ///
    /// `classes` 中找不到该班级时不做任何修改并返回 `None`。
    pub fn toggle_class(&mut self, class_id: &str, classes: &[ClassEntity]) -> Option<bool> {
        let class = classes.iter().find(|c| c.id == class_id)?;

        if self.is_selected(class_id) {
            self.selected_class_ids.retain(|id| id != class_id);
            for student_id in &class.student_ids {
                let still_reachable = self.selected_class_ids.iter().any(|other_id| {
                    classes
                        .iter()
                        .find(|c| &c.id == other_id)
                        .is_some_and(|other| other.has_student(student_id))
                });
                if !still_reachable {
                    self.recipients.retain(|id| id != student_id);
                }
            }
            Some(false)
        } else {
            self.selected_class_ids.push(class_id.to_string());
            for student_id in &class.student_ids {
                if !self.recipients.contains(student_id) {
                    self.recipients.push(student_id.clone());
                }
            }
            Some(true)
        }
    }

    /// 按当前选择全量重算收件人，例如班级成员在编辑期间发生了变化
    pub fn recompute(&mut self, classes: &[ClassEntity]) {
        self.recipients = resolve_recipients(&self.selected_class_ids, classes);
    }

    pub fn clear(&mut self) {
        self.selected_class_ids.clear();
        self.recipients.clear();
    }
}
