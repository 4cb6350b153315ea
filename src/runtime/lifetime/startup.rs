use tracing::{debug, warn};

use crate::cache::ConfirmStore;
use crate::client::ApiClient;
use crate::config::AppConfig;
use crate::errors::Result;

pub struct StartupContext {
    pub client: ApiClient,
    pub confirmations: ConfirmStore,
}

/// 准备服务器启动的上下文
/// 包括后端客户端和删除确认缓存
pub async fn prepare_server_startup() -> Result<StartupContext> {
    let config = AppConfig::get();

    let client = ApiClient::new(&config.backend)?;
    warn!(
        "Backend services: teacher={}, student={}, class={}, schedule={}",
        config.backend.teacher_url,
        config.backend.student_url,
        config.backend.class_url,
        config.backend.schedule_url
    );

    let confirmations = ConfirmStore::new(&config.confirm);
    debug!(
        "Confirmation store ready, pending dialogs expire after {}s",
        config.confirm.ttl_secs
    );

    Ok(StartupContext {
        client,
        confirmations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_startup_with_defaults() {
        let startup = prepare_server_startup().await.unwrap();
        assert_eq!(startup.client.class_service_port(), 8084);
    }
}
