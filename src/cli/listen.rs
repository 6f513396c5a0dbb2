//! `cashly listen`: follow the notification feed until Ctrl-C

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::config::settings::Settings;
use crate::error::{CashlyError, CashlyResult};
use crate::notifications::{NotificationClient, WsTransport};

/// Handle `cashly listen`
pub fn handle_listen(
    settings: &Settings,
    url: Option<String>,
    delay_secs: Option<u64>,
) -> CashlyResult<()> {
    let url = url.unwrap_or_else(|| settings.notifications_url.clone());
    let delay = delay_secs
        .map(Duration::from_secs)
        .unwrap_or_else(|| settings.reconnect_delay());

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CashlyError::Socket(format!("Failed to start runtime: {}", e)))?;

    runtime.block_on(async move {
        let client = NotificationClient::new(url, delay, Arc::new(WsTransport));
        client.subscribe(|n| println!("{}", n.summary()));

        let handle = client.handle();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("interrupt received");
                handle.disconnect();
            }
        });

        client.run().await;
    });

    Ok(())
}
