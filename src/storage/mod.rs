//! 存储抽象层
//!
//! 四类实体（班级、学生、作业、通知）共用同一套仓储接口 [`EntityStore`]，
//! 业务层只依赖 [`Storage`]，具体后端可替换。

use std::sync::Arc;

use crate::config::StorageConfig;
use crate::errors::Result;
use crate::models::{
    assignments::{
        entities::AssignmentEntity,
        requests::{CreateAssignmentRequest, UpdateAssignmentRequest},
    },
    classes::{
        entities::ClassEntity,
        requests::{CreateClassRequest, UpdateClassRequest},
    },
    notifications::{
        entities::NotificationEntity,
        requests::{CreateNotificationRequest, UpdateNotificationRequest},
    },
    students::{
        entities::StudentEntity,
        requests::{CreateStudentRequest, UpdateStudentRequest},
    },
};

pub mod memory;

pub use memory::MemoryStorage;

/// 可存储的实体
pub trait Entity: Clone + Send + Sync + 'static {
    /// 实体名称，用于错误信息和日志
    const KIND: &'static str;
    /// 创建时使用的字段集合
    type Draft: Send + 'static;
    /// 更新时使用的补丁
    type Patch: Send + 'static;

    fn id(&self) -> &str;
}

impl Entity for ClassEntity {
    const KIND: &'static str = "Class";
    type Draft = CreateClassRequest;
    type Patch = UpdateClassRequest;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for StudentEntity {
    const KIND: &'static str = "Student";
    type Draft = CreateStudentRequest;
    type Patch = UpdateStudentRequest;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for AssignmentEntity {
    const KIND: &'static str = "Assignment";
    type Draft = CreateAssignmentRequest;
    type Patch = UpdateAssignmentRequest;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for NotificationEntity {
    const KIND: &'static str = "Notification";
    type Draft = CreateNotificationRequest;
    type Patch = UpdateNotificationRequest;

    fn id(&self) -> &str {
        &self.id
    }
}

/// 单类实体的仓储接口
///
/// 所有按 id 访问的操作在记录不存在时返回 `NotFound`，除此之外不会失败。
#[async_trait::async_trait]
pub trait EntityStore<E: Entity>: Send + Sync {
    // 按插入顺序返回全部记录的副本
    async fn get_all(&self) -> Result<Vec<E>>;
    // 通过ID获取记录
    async fn get_by_id(&self, id: &str) -> Result<E>;
    // 创建记录，id 与时间戳由存储层生成
    async fn create(&self, draft: E::Draft) -> Result<E>;
    // 浅合并补丁
    async fn update(&self, id: &str, patch: E::Patch) -> Result<E>;
    // 删除记录，不级联
    async fn delete(&self, id: &str) -> Result<bool>;
}

/// 全部实体仓储的集合
pub trait Storage: Send + Sync {
    fn classes(&self) -> &dyn EntityStore<ClassEntity>;
    fn students(&self) -> &dyn EntityStore<StudentEntity>;
    fn assignments(&self) -> &dyn EntityStore<AssignmentEntity>;
    fn notifications(&self) -> &dyn EntityStore<NotificationEntity>;
}

/// 按配置创建存储后端，必要时加载样例数据
pub async fn create_storage(config: &StorageConfig) -> Result<Arc<dyn Storage>> {
    let storage = MemoryStorage::new(config.latency);
    if config.seed {
        let fixtures = memory::seed::Fixtures::load_embedded()?;
        storage.seed(fixtures)?;
    }
    Ok(Arc::new(storage))
}
