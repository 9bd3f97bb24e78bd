use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::errors::Result;
use crate::storage::{Storage, create_storage};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 准备服务器启动的上下文：创建存储并按配置载入样例数据
pub async fn prepare_server_startup() -> Result<StartupContext> {
    let config = AppConfig::get();
    let latency = config.storage.latency;

    debug!(
        "Simulated latency: read {} ms, list {} ms, write {} ms, send {} ms",
        latency.read_ms, latency.list_ms, latency.write_ms, latency.send_ms
    );

    let storage = create_storage(&config.storage).await?;
    if config.storage.seed {
        warn!("In-memory storage initialized with sample data");
    } else {
        warn!("In-memory storage initialized empty");
    }

    Ok(StartupContext { storage })
}
