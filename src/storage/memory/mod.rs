//! 内存存储实现
//!
//! 每次调用先等待固定的模拟延迟，再在短暂持有的锁内完成读写，
//! 因此并发调用按完成顺序生效，更新为后写覆盖。

mod assignments;
mod classes;
mod membership;
mod notifications;
pub mod seed;
mod students;
mod table;

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::config::LatencyConfig;
use crate::errors::Result;
use crate::models::{
    assignments::entities::AssignmentEntity, classes::entities::ClassEntity,
    notifications::entities::NotificationEntity, students::entities::StudentEntity,
};
use crate::storage::{EntityStore, Storage};
use crate::utils::id::IdGenerator;

pub use assignments::MemoryAssignmentStore;
pub use classes::MemoryClassStore;
pub use notifications::MemoryNotificationStore;
pub use students::MemoryStudentStore;

use membership::MembershipTable;

/// 模拟网络往返
pub(crate) async fn simulate_latency(ms: u64) {
    if ms > 0 {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}

/// 内存存储
pub struct MemoryStorage {
    classes: MemoryClassStore,
    students: MemoryStudentStore,
    assignments: MemoryAssignmentStore,
    notifications: MemoryNotificationStore,
}

impl MemoryStorage {
    pub fn new(latency: LatencyConfig) -> Self {
        let ids = Arc::new(IdGenerator::new());
        let memberships = Arc::new(MembershipTable::new());

        Self {
            classes: MemoryClassStore::new(latency, ids.clone(), memberships.clone()),
            students: MemoryStudentStore::new(latency, ids.clone(), memberships),
            assignments: MemoryAssignmentStore::new(latency, ids.clone()),
            notifications: MemoryNotificationStore::new(latency, ids),
        }
    }

    /// 无延迟的存储，用于测试
    pub fn instant() -> Self {
        Self::new(LatencyConfig::default())
    }

    /// 载入样例数据，与运行时创建的记录没有区别
    pub fn seed(&self, fixtures: seed::Fixtures) -> Result<()> {
        let counts = (
            fixtures.classes.len(),
            fixtures.students.len(),
            fixtures.assignments.len(),
            fixtures.notifications.len(),
        );

        for class in fixtures.classes {
            self.classes.insert_seeded(class)?;
        }
        for student in fixtures.students {
            self.students.insert_seeded(student)?;
        }
        for assignment in fixtures.assignments {
            self.assignments.insert_seeded(assignment)?;
        }
        for notification in fixtures.notifications {
            self.notifications.insert_seeded(notification)?;
        }

        info!(
            "Seeded storage with {} classes, {} students, {} assignments, {} notifications",
            counts.0, counts.1, counts.2, counts.3
        );
        Ok(())
    }
}

impl Storage for MemoryStorage {
    fn classes(&self) -> &dyn EntityStore<ClassEntity> {
        &self.classes
    }

    fn students(&self) -> &dyn EntityStore<StudentEntity> {
        &self.students
    }

    fn assignments(&self) -> &dyn EntityStore<AssignmentEntity> {
        &self.assignments
    }

    fn notifications(&self) -> &dyn EntityStore<NotificationEntity> {
        &self.notifications
    }
}
