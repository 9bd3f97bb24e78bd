use tokio::signal;
use tracing::{error, warn};

/// 等待 Ctrl+C，收到后返回以触发优雅退出
pub async fn listen_for_shutdown() {
    match signal::ctrl_c().await {
        Ok(()) => warn!("Shutdown signal received, stopping the dashboard server..."),
        Err(e) => error!("Failed to listen for shutdown signal: {}", e),
    }
}
