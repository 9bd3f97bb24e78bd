//! 领域逻辑
//!
//! 不依赖 HTTP 层，只操作模型和存储接口。

pub mod composer;
pub mod dashboard;
pub mod queries;
pub mod quick;
pub mod resolver;
pub mod templates;

pub use composer::{ComposeRejection, NotificationComposer};
pub use resolver::{RecipientResolver, resolve_recipients};
