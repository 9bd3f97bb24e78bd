use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "assignment.ts")]
pub struct AssignmentEntity {
    // 唯一 ID
    pub id: String,
    // 所属班级 ID（可能指向已删除的班级）
    pub class_id: String,
    // 作业标题
    pub title: String,
    // 作业描述
    #[serde(default)]
    pub description: String,
    // 截止日期
    pub due_date: chrono::NaiveDate,
    // 附件（暂未使用）
    #[serde(default)]
    pub attachments: Vec<String>,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl AssignmentEntity {
    /// 截止日期当天 00:00 (UTC) 的时间点，用于与当前时间比较
    pub fn due_instant(&self) -> chrono::DateTime<chrono::Utc> {
        self.due_date.and_time(chrono::NaiveTime::MIN).and_utc()
    }
}

// 作业列表过滤条件
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "assignment.ts")]
pub enum AssignmentFilter {
    #[default]
    All, // 全部
    Upcoming, // 未到期
    Overdue,  // 已过期
}

impl AssignmentFilter {
    pub const ALL: &'static str = "all";
    pub const UPCOMING: &'static str = "upcoming";
    pub const OVERDUE: &'static str = "overdue";
}

impl<'de> Deserialize<'de> for AssignmentFilter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for AssignmentFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssignmentFilter::All => write!(f, "{}", AssignmentFilter::ALL),
            AssignmentFilter::Upcoming => write!(f, "{}", AssignmentFilter::UPCOMING),
            AssignmentFilter::Overdue => write!(f, "{}", AssignmentFilter::OVERDUE),
        }
    }
}

impl std::str::FromStr for AssignmentFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            AssignmentFilter::ALL => Ok(AssignmentFilter::All),
            AssignmentFilter::UPCOMING => Ok(AssignmentFilter::Upcoming),
            AssignmentFilter::OVERDUE => Ok(AssignmentFilter::Overdue),
            _ => Err(format!(
                "Invalid assignment filter: '{s}'. Supported: all, upcoming, overdue"
            )),
        }
    }
}
