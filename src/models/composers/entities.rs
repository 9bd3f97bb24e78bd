use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 通知编辑器状态
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "composer.ts")]
pub enum ComposerState {
    #[default]
    Idle, // 关闭
    Editing,    // 编辑中
    Submitting, // 提交中
}
